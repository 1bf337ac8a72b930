mod config;
mod logging;
mod mark;
mod rubric;
mod status;
