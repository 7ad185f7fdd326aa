// Chat module: credential gate, prompt assembly, session transcript.
// All model calls go through llm_client — no direct Gemini calls here.

pub mod handlers;
pub mod prompts;
pub mod session;
pub mod spoiler;
