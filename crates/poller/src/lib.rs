pub mod fetcher;
pub mod orchestrator;
pub mod translator;
pub mod validator;
