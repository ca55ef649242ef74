#![allow(dead_code)]

pub mod chain;
pub mod feed;
pub mod market;
pub mod notifier;
pub mod tracker;
pub mod tx;
