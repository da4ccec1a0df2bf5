//! Static model tables for every known provider.
//!
//! Entries are listed in declaration order; that order is what
//! [`Provider::list_models`](super::Provider::list_models) returns. A model
//! name must appear under exactly one provider.

use super::types::{ModelEntry, Provider};

// ============================================================================
// OpenAI
// ============================================================================

const OPENAI_MODELS: &[ModelEntry] = &[
    ModelEntry::new("GPT_4", "gpt-4"),
    ModelEntry::new("GPT_4_32K", "gpt-4-32k"),
    ModelEntry::new("GPT_4_TURBO", "gpt-4-turbo"),
    ModelEntry::new("GPT_4_TURBO_PREVIEW", "gpt-4-turbo-preview"),
    ModelEntry::new("GPT_4O", "gpt-4o"),
    ModelEntry::new("GPT_4O_MINI", "gpt-4o-mini"),
    ModelEntry::new("GPT_3_5_TURBO", "gpt-3.5-turbo"),
    ModelEntry::new("GPT_3_5_TURBO_16K", "gpt-3.5-turbo-16k"),
    ModelEntry::new("O1_PREVIEW", "o1-preview"),
    ModelEntry::new("O1_MINI", "o1-mini"),
];

// ============================================================================
// Anthropic
// ============================================================================

const ANTHROPIC_MODELS: &[ModelEntry] = &[
    ModelEntry::new("CLAUDE_3_OPUS", "claude-3-opus-20240229"),
    ModelEntry::new("CLAUDE_3_SONNET", "claude-3-sonnet-20240229"),
    ModelEntry::new("CLAUDE_3_HAIKU", "claude-3-haiku-20240307"),
    ModelEntry::new("CLAUDE_3_5_SONNET", "claude-3-5-sonnet-20241022"),
    ModelEntry::new("CLAUDE_3_5_HAIKU", "claude-3-5-haiku-20241022"),
    ModelEntry::new("CLAUDE_2_1", "claude-2.1"),
    ModelEntry::new("CLAUDE_2", "claude-2.0"),
    ModelEntry::new("CLAUDE_INSTANT", "claude-instant-1.2"),
];

// ============================================================================
// Google
// ============================================================================

const GOOGLE_MODELS: &[ModelEntry] = &[
    ModelEntry::new("GEMINI_PRO", "gemini-pro"),
    ModelEntry::new("GEMINI_PRO_VISION", "gemini-pro-vision"),
    ModelEntry::new("GEMINI_1_5_PRO", "gemini-1.5-pro"),
    ModelEntry::new("GEMINI_1_5_FLASH", "gemini-1.5-flash"),
    ModelEntry::new("PALM_2", "text-bison-001"),
];

// ============================================================================
// Cohere
// ============================================================================

const COHERE_MODELS: &[ModelEntry] = &[
    ModelEntry::new("COMMAND", "command"),
    ModelEntry::new("COMMAND_LIGHT", "command-light"),
    ModelEntry::new("COMMAND_NIGHTLY", "command-nightly"),
    ModelEntry::new("COMMAND_R", "command-r"),
    ModelEntry::new("COMMAND_R_PLUS", "command-r-plus"),
];

// ============================================================================
// Mistral
// ============================================================================

const MISTRAL_MODELS: &[ModelEntry] = &[
    ModelEntry::new("MISTRAL_7B", "mistral-7b-instruct"),
    ModelEntry::new("MIXTRAL_8X7B", "mixtral-8x7b-instruct"),
    ModelEntry::new("MISTRAL_SMALL", "mistral-small"),
    ModelEntry::new("MISTRAL_MEDIUM", "mistral-medium"),
    ModelEntry::new("MISTRAL_LARGE", "mistral-large"),
];

// ============================================================================
// Meta
// ============================================================================

const META_MODELS: &[ModelEntry] = &[
    ModelEntry::new("LLAMA_2_7B", "llama-2-7b-chat"),
    ModelEntry::new("LLAMA_2_13B", "llama-2-13b-chat"),
    ModelEntry::new("LLAMA_2_70B", "llama-2-70b-chat"),
    ModelEntry::new("CODE_LLAMA_34B", "codellama-34b-instruct"),
    ModelEntry::new("LLAMA_3_8B", "llama-3-8b-instruct"),
    ModelEntry::new("LLAMA_3_70B", "llama-3-70b-instruct"),
];

// ============================================================================
// Huggingface
// ============================================================================

const HUGGINGFACE_MODELS: &[ModelEntry] = &[
    ModelEntry::new("VICUNA_13B", "lmsys/vicuna-13b-v1.5"),
    ModelEntry::new("ALPACA_7B", "chavinlo/alpaca-native"),
    ModelEntry::new("FALCON_7B", "tiiuae/falcon-7b-instruct"),
    ModelEntry::new("FALCON_40B", "tiiuae/falcon-40b-instruct"),
    ModelEntry::new("ZEPHYR_7B", "HuggingFaceH4/zephyr-7b-beta"),
    ModelEntry::new("STARCODER", "bigcode/starcoder"),
];

// ============================================================================
// Moonshot
// ============================================================================

const MOONSHOT_MODELS: &[ModelEntry] = &[
    ModelEntry::new("MOONSHOT_V1_8K", "moonshot-v1-8k"),
    ModelEntry::new("MOONSHOT_V1_32K", "moonshot-v1-32k"),
    ModelEntry::new("MOONSHOT_V1_128K", "moonshot-v1-128k"),
    ModelEntry::new("MOONSHOT_V1_8K_VISION", "moonshot-v1-8k-vision-preview"),
    ModelEntry::new("MOONSHOT_V1_32K_VISION", "moonshot-v1-32k-vision-preview"),
    ModelEntry::new("MOONSHOT_V1_128K_VISION", "moonshot-v1-128k-vision-preview"),
];

// ============================================================================
// Catalog Access
// ============================================================================

/// Returns the catalog entries for a provider.
pub(crate) fn entries(provider: Provider) -> &'static [ModelEntry] {
    match provider {
        Provider::OpenAi => OPENAI_MODELS,
        Provider::Anthropic => ANTHROPIC_MODELS,
        Provider::Google => GOOGLE_MODELS,
        Provider::Cohere => COHERE_MODELS,
        Provider::Mistral => MISTRAL_MODELS,
        Provider::Meta => META_MODELS,
        Provider::Huggingface => HUGGINGFACE_MODELS,
        Provider::Moonshot => MOONSHOT_MODELS,
    }
}
