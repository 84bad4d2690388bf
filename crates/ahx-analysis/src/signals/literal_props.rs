//! largeLiteralProps: big object/array literals passed inline as JSX props.

use ahx_core::constants::{
    DEFAULT_ARRAY_ELEMENTS_THRESHOLD, DEFAULT_LITERAL_TEXT_THRESHOLD,
    DEFAULT_OBJECT_PROPS_THRESHOLD,
};
use ahx_core::{Signal, SignalScore};

use super::SignalExtractor;
use crate::parsers::syntax::named_children;
use crate::parsers::{ParsedFile, SyntaxIndex};

/// Thresholds are exclusive: a literal is large when it has more than
/// `object_props` properties, more than `array_elements` elements, or more
/// than `text_len` UTF-16 code units of source. The text length reported
/// in detail lines uses the same unit.
#[derive(Debug, Clone, Copy)]
pub struct LargeLiteralPropsExtractor {
    pub object_props: usize,
    pub array_elements: usize,
    pub text_len: usize,
}

impl Default for LargeLiteralPropsExtractor {
    fn default() -> Self {
        Self {
            object_props: DEFAULT_OBJECT_PROPS_THRESHOLD,
            array_elements: DEFAULT_ARRAY_ELEMENTS_THRESHOLD,
            text_len: DEFAULT_LITERAL_TEXT_THRESHOLD,
        }
    }
}

impl SignalExtractor for LargeLiteralPropsExtractor {
    fn signal(&self) -> Signal {
        Signal::LargeLiteralProps
    }

    fn extract(&self, file: &ParsedFile, syntax: &SyntaxIndex<'_>) -> Option<SignalScore> {
        let mut detail = Vec::new();
        for attr in &syntax.attributes {
            let Some(expr) = attr.expression() else { continue };
            let len = file.text(expr).encode_utf16().count();
            match expr.kind() {
                "object" => {
                    let props = named_children(expr).len();
                    if props > self.object_props || len > self.text_len {
                        detail.push(format!(
                            "{} object props={props} len={len} at {}",
                            attr.name, attr.line
                        ));
                    }
                }
                "array" => {
                    let elements = named_children(expr).len();
                    if elements > self.array_elements || len > self.text_len {
                        detail.push(format!(
                            "{} array len={elements} text={len} at {}",
                            attr.name, attr.line
                        ));
                    }
                }
                _ => {}
            }
        }
        if detail.is_empty() {
            return None;
        }
        Some(SignalScore::saturated(detail.len() as f64, detail))
    }
}
