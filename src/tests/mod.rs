#![cfg(test)]

mod discovery;
mod flags;
mod helpers;
mod python;
mod target;
