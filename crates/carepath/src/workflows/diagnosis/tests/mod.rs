mod common;
mod deviation;
mod resolver;
mod result;
mod routing;
mod service;
mod stress;
