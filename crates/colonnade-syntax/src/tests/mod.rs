//! Unit and behavioural tests for `colonnade-syntax`.

mod unit;
