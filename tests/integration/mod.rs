//! Integration Tests Module
//!
//! End-to-end tests for the analysis pipeline: the orchestrator's progress
//! contract, session bookkeeping across runs, and LLM reply handling.

mod support;

// Full pipeline runs against a scripted generator
mod pipeline_test;

// Session store bookkeeping and persistence
mod session_test;

// LLM reply extraction and the error taxonomy
mod llm_test;
