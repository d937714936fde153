pub mod eightball;
pub mod joke;
pub mod meme;
pub mod petpet;
pub mod poll;

/// Uniformly pick one line; `lines` must not be empty.
fn pick<'a>(lines: &[&'a str]) -> &'a str {
    lines[rand::random_range(0..lines.len())]
}
