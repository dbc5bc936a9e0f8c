#![forbid(unsafe_code)]

fn main() {
    vboard_demo::init_tracing();
    if let Err(error) = vboard_demo::run_from_env() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}
