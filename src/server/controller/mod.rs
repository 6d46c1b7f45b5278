pub mod car;
pub mod owner;

#[cfg(test)]
mod test;
