#[tracing::instrument]
pub fn process(input: &str) -> i64 {
    input
        .lines()
        .filter_map(|line| {
            line.split_whitespace()
                .filter_map(|value| value.parse::<i64>().ok())
                .max()
        })
        .sum()
}
