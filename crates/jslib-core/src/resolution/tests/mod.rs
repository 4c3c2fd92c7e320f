#[cfg(test)]
mod resolver_tests;
