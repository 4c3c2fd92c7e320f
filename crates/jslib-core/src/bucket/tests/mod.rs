#[cfg(test)]
mod container_tests;
