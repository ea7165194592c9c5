mod failures;
mod properties;
