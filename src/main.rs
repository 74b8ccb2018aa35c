use env_logger;
use monkey;

fn main() -> Result<(), &'static str> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .ok_or("Usage: monkey <file>")?;
    let source = monkey::file(&path)?;
    monkey::run(source)
}
