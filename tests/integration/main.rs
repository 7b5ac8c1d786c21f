//! Integration tests for the LabVault engines.

mod helpers;

mod occupancy_test;
mod placement_test;
mod tree_test;
