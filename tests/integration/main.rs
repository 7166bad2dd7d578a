//! Integration test driver for the `tests/integration/` submodules.
//!
//! Each `mod` below maps to a file that exercises the controller against
//! mock adapters in simulated time. All tests run on the host with no real
//! hardware required.

mod controller_tests;
mod mock_hw;
mod scenario_tests;
