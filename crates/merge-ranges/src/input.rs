use crate::cli::Cli;
use anyhow::Context;
use std::io::Read;


pub fn read_tokens(args: &Cli) -> anyhow::Result<Vec<String>> {
    if !args.tokens.is_empty() {
        return Ok(
            args.tokens.iter().flat_map(|arg| split_tokens(arg)).map(String::from).collect()
        )
    }

    let text = if let Some(path) = args.input.as_ref() {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    } else {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read standard input")?;
        text
    };

    Ok(split_tokens(&text).map(String::from).collect())
}


/// Splits on commas and whitespace, dropping empty pieces.
pub fn split_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}
