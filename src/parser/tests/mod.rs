//! Tests for the Pratt parser and its entry points.
