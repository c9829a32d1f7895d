//! Unit tests for task workflow reconciliation.
