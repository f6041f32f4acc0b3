//! Edge case tests for wafc-lex
