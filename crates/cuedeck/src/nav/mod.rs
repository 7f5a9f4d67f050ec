pub mod focus;
pub mod fragment;
pub mod input;
pub mod intent;
pub mod location;
pub mod media;
pub mod router;
pub mod state;
pub mod view;

#[cfg(test)]
mod tests;
