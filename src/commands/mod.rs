//! Command implementations for the farepath CLI

pub mod dispatch;

mod build;
mod compare;
mod helpers;
mod reach;
mod route;
