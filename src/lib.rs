//! Workspace-level integration tests for the Fibonacci device.
