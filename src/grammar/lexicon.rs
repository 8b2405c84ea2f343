//! Word lists used by summary synthesis and pluralization.

/// Verbs that commonly open a member name (`GetUser`, `LoadAsync`, `TryParse`).
const VERBS: &[&str] = &[
    "accept", "activate", "add", "aggregate", "allocate", "append", "apply", "assert", "assign",
    "attach", "authenticate", "authorize", "begin", "bind", "build", "calculate", "call",
    "cancel", "check", "clean", "clear", "clone", "close", "collect", "combine", "commit",
    "compare", "compile", "complete", "compose", "compute", "configure", "connect", "contains",
    "convert", "copy", "count", "create", "deactivate", "decode", "decrypt", "delete",
    "deserialize", "detach", "determine", "disable", "dispatch", "dispose", "do", "download",
    "drop", "emit", "enable", "encode", "encrypt", "end", "ensure", "enqueue", "dequeue",
    "evaluate", "execute", "exists", "expand", "export", "extract", "fetch", "fill", "filter",
    "find", "finish", "flush", "format", "generate", "get", "handle", "hash", "hide", "import",
    "increment", "decrement", "initialize", "insert", "invoke", "is", "has", "can", "should",
    "will", "join", "launch", "list", "load", "lock", "log", "lookup", "make", "map", "merge", "move",
    "navigate", "normalize", "notify", "open", "parse", "pause", "persist", "ping", "populate",
    "post", "prepare", "print", "process", "publish", "pull", "push", "put", "query", "raise",
    "read", "receive", "refresh", "register", "reload", "remove", "rename", "render",
    "replace", "reset", "resolve", "restore", "resume", "retrieve", "retry", "return", "run",
    "save", "scan", "search", "select", "send", "serialize", "set", "setup", "show", "sort",
    "split", "start", "stop", "store", "submit", "subscribe", "swap", "sync", "toggle",
    "transform", "translate", "trim", "try", "unlock", "unregister", "unsubscribe", "update",
    "upload", "upsert", "validate", "verify", "visit", "wait", "write",
];

/// Words that read as verbs but are far more often container or value nouns
/// in type and member names.
const NOUN_LIKE: &[&str] = &[
    "array", "collection", "count", "dictionary", "file", "hash", "key", "list", "lock", "log",
    "map", "name", "post", "queue", "record", "result", "return", "set", "sort", "stack",
    "string", "table", "task", "type", "value",
];

/// Whether `word` is a recognized opening verb (case-insensitive).
pub fn is_verb(word: &str) -> bool {
    let lower = word.to_lowercase();
    VERBS.contains(&lower.as_str())
}

/// Whether `word` should be treated as a noun even though it can be a verb.
pub fn is_noun_like(word: &str) -> bool {
    let lower = word.to_lowercase();
    NOUN_LIKE.contains(&lower.as_str())
}

/// Whether `word` is a verb that pluralization must leave alone.
pub fn is_pure_verb(word: &str) -> bool {
    is_verb(word) && !is_noun_like(word)
}

/// Verbs that only make sense as a yes/no question (`IsValid`, `HasItems`).
const AUXILIARIES: &[&str] = &["can", "does", "has", "is", "should", "was", "will"];

/// Whether `word` is an auxiliary verb.
pub fn is_auxiliary(word: &str) -> bool {
    let lower = word.to_lowercase();
    AUXILIARIES.contains(&lower.as_str())
}

/// Whether `word` can open a summary sentence as its verb: a recognized,
/// non-auxiliary verb in base or third-person form (`Load`, `Loads`).
pub fn is_opening_verb(word: &str) -> bool {
    if is_auxiliary(word) {
        return false;
    }
    if is_verb(word) {
        return true;
    }
    let lower = word.to_lowercase();
    lower
        .strip_suffix("es")
        .is_some_and(|stem| is_verb(stem) && !is_auxiliary(stem))
        || lower
            .strip_suffix('s')
            .is_some_and(|stem| is_verb(stem) && !is_auxiliary(stem))
}

/// Function words after which "the" must not be inserted.
const FUNCTION_WORDS: &[&str] = &[
    "a", "all", "an", "and", "as", "at", "by", "for", "from", "if", "in", "into", "of", "on",
    "or", "the", "to", "with", "without",
];

/// Whether `word` is an article, preposition or conjunction.
pub fn is_function_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    FUNCTION_WORDS.contains(&lower.as_str())
}
