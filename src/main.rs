use std::env;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    // A missing logging config must not break a pipe filter; logging just
    // stays off.
    log4rs::init_file("log4rs.yml", Default::default()).ok();
    log::debug!("#Start main()");

    ipv4calc::cli::run(env::args());
}
