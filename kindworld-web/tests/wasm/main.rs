#![cfg(target_arch = "wasm32")]

mod app_tests;
