//! Integration flows across greeter-factory and greeter-demo.

mod closure_capture;
mod delayed_greeting;
