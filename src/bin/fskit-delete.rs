use std::process;

fn main() {
    fskit::logging::init();
    let argv: Vec<String> = std::env::args().skip(1).collect();
    process::exit(fskit::app::run_delete(&argv));
}
