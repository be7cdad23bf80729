#[cfg(test)]
mod util;

mod range;
