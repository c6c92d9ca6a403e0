mod properties;
mod structure;
