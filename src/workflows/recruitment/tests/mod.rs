mod common;

mod export;
