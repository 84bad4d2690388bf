//! Shared constants for the ahx engine.

/// ahx version string, stamped into merged reports.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default maximum source file size in bytes (1MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;

/// Default number of worker threads (0 = rayon decides).
pub const DEFAULT_THREADS: usize = 0;

/// Directories searched for sources, relative to the project root.
pub const DEFAULT_SOURCE_DIRS: &[&str] = &["src", "pages", "app"];

/// Source extensions picked up by discovery.
pub const DEFAULT_SOURCE_EXTENSIONS: &[&str] = &["js", "ts", "jsx", "tsx"];

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "ahx.toml";

/// Directory (under the project root) holding scan and report artifacts.
pub const ARTIFACT_DIR: &str = ".ahx";

// ---- Signal extraction ----

/// Extension search order for local import resolution.
/// Each is tried as `<base><ext>`, then as `<base>/index<ext>`.
pub const IMPORT_EXTENSIONS: &[&str] = &[".tsx", ".ts", ".jsx", ".js"];

/// Known charting packages. Matched exactly, or as a substring with the
/// leading `@` of a scope removed.
pub const CHART_PACKAGES: &[&str] = &[
    "chart.js",
    "recharts",
    "victory",
    "echarts",
    "@antv/g2",
    "d3",
    "apexcharts",
    "nivo",
    "visx",
];

/// Identifiers counted as client-only browser globals.
pub const CLIENT_ONLY_GLOBALS: &[&str] = &["window", "document", "navigator"];

/// Hook names whose bodies count towards effect heaviness.
pub const EFFECT_HOOKS: &[&str] = &["useEffect", "useLayoutEffect"];

/// Calls counted towards context-at-root.
pub const CONTEXT_CALLS: &[&str] = &["createContext", "useContext"];

/// Object literal props above this property count are "large".
pub const DEFAULT_OBJECT_PROPS_THRESHOLD: usize = 5;

/// Array literal props above this element count are "large".
pub const DEFAULT_ARRAY_ELEMENTS_THRESHOLD: usize = 10;

/// Literal props whose source text exceeds this many characters are "large".
pub const DEFAULT_LITERAL_TEXT_THRESHOLD: usize = 200;

// ---- Hotspot scoring ----

/// Upper bound of every hotspot score.
pub const MAX_HOTSPOT_SCORE: f64 = 20.0;

/// Points awarded to a signal's normalized presence.
pub const NORMALIZED_POINTS: f64 = 7.0;

/// Cap on the log10 magnitude term of a signal.
pub const MAGNITUDE_CAP: f64 = 3.0;

/// LCP (ms) worth one point; capped at `LCP_CAP`.
pub const LCP_UNIT_MS: f64 = 2000.0;
pub const LCP_CAP: f64 = 4.0;

/// TBT (ms) worth one point; capped at `TBT_CAP`.
pub const TBT_UNIT_MS: f64 = 300.0;
pub const TBT_CAP: f64 = 4.0;

/// CLS worth one point; capped at `CLS_CAP`.
pub const CLS_UNIT: f64 = 0.1;
pub const CLS_CAP: f64 = 2.0;

/// Script bytes worth one point (150 KiB); capped at `JS_BYTES_CAP`.
pub const JS_BYTES_UNIT: f64 = 153_600.0;
pub const JS_BYTES_CAP: f64 = 4.0;

// ---- Suggestions ----

/// Minimum effect statements before `deferEffects` is suggested.
pub const DEFAULT_EFFECT_STATEMENTS_MIN: f64 = 5.0;

/// Minimum event handler props before `reduceEventHandlers` is suggested.
pub const DEFAULT_EVENT_HANDLERS_MIN: f64 = 5.0;

/// Minimum context call sites/providers before `moveContextDown` is suggested.
pub const DEFAULT_CONTEXT_SITES_MIN: f64 = 2.0;

// ---- Reports ----

/// Maximum number of files listed in the markdown report.
pub const MARKDOWN_MAX_FILES: usize = 100;
