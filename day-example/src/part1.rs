#[tracing::instrument]
pub fn process(input: &str) -> i64 {
    input
        .lines()
        .flat_map(str::split_whitespace)
        .filter_map(|value| value.parse::<i64>().ok())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process() {
        let input = "\
1 2 3
40 50
6";
        assert_eq!(102, process(input));
    }
}
