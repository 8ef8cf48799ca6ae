mod drop_count;
mod properties;
