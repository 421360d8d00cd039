//! Test suites for the Skeeball agent.

mod support;
