use day_example::{part1, part2};
use miette::Context;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt::init();

    let file = include_str!("../input.txt");
    aoc_runner::run(file, part1::process, part2::process).context("run day-example")?;

    Ok(())
}
