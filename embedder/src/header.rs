//! Streaming writer for the generated C++ header.
//!
//! The fragment is laid out as
//!
//! ```text
//! #pragma once
//! #include <cstdint>
//! #include <array>
//! const std::array<uint8_t, N> symbol = {b0,b1,...,};
//! ```
//!
//! Every byte is written as a decimal token followed by `,`, so an empty
//! input produces `{}` and a single byte produces `{255,}`.

use std::fmt;
use std::io::Write;

use crate::errors::{EmbedError, EmbedResult};


const PREAMBLE: &str = "#pragma once\n#include <cstdint>\n#include <array>\n";
const TERMINATOR: &str = "};\n";

// C++20 keywords and alternative operator tokens.
const RESERVED: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

/// Returns true when `name` can be used as a C++ identifier.
pub fn is_valid_symbol(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_') && !RESERVED.contains(&name)
}

/// A name already checked by [`is_valid_symbol`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: &str) -> EmbedResult<Self> {
        if !is_valid_symbol(name) {
            return Err(EmbedError::InvalidSymbol(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub struct HeaderWriter<W: Write> {
    out: W,
    declared: u64,
    written: u64,
    // scratch for one chunk of tokens, reused across pushes
    line: String,
}

impl<W: Write> HeaderWriter<W> {
    /// Writes the preamble and the declaration head for an array of `len` bytes.
    pub fn begin(mut out: W, symbol: &Symbol, len: u64) -> EmbedResult<Self> {
        out.write_all(PREAMBLE.as_bytes())?;
        write!(out, "const std::array<uint8_t, {len}> {symbol} = {{")?;
        Ok(Self {
            out,
            declared: len,
            written: 0,
            line: String::new(),
        })
    }

    pub fn push(&mut self, bytes: &[u8]) -> EmbedResult<()> {
        use std::fmt::Write as _;

        self.line.clear();
        for b in bytes {
            // writing into a String cannot fail
            let _ = write!(self.line, "{b},");
        }
        self.out.write_all(self.line.as_bytes())?;
        self.written += bytes.len() as u64;
        Ok(())
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    /// Closes the literal and hands back the sink.
    ///
    /// Fails without writing the terminator when the number of streamed bytes
    /// differs from the length given to [`HeaderWriter::begin`].
    pub fn finish(mut self) -> EmbedResult<W> {
        if self.written != self.declared {
            return Err(EmbedError::LengthMismatch {
                declared: self.declared,
                written: self.written,
            });
        }
        self.out.write_all(TERMINATOR.as_bytes())?;
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Renders the whole header for bytes already held in memory.
pub fn render(symbol: &str, bytes: &[u8]) -> EmbedResult<String> {
    let symbol = Symbol::new(symbol)?;
    let mut writer = HeaderWriter::begin(Vec::new(), &symbol, bytes.len() as u64)?;
    writer.push(bytes)?;
    let out = writer.finish()?;
    // only ASCII is ever written
    Ok(String::from_utf8_lossy(&out).into_owned())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn blob() -> Symbol {
        Symbol::new("blob").unwrap()
    }

    #[test]
    fn renders_three_bytes() {
        let text = render("zcblive_dll", &[0, 1, 255]).unwrap();
        assert_eq!(
            text,
            "#pragma once\n#include <cstdint>\n#include <array>\n\
             const std::array<uint8_t, 3> zcblive_dll = {0,1,255,};\n"
        );
    }

    #[test]
    fn renders_empty_input() {
        let text = render("blob", &[]).unwrap();
        assert!(text.ends_with("const std::array<uint8_t, 0> blob = {};\n"));
    }

    #[test]
    fn renders_single_byte() {
        let text = render("blob", &[255]).unwrap();
        assert!(text.ends_with("const std::array<uint8_t, 1> blob = {255,};\n"));
    }

    #[test]
    fn split_pushes_match_single_push() {
        let data: Vec<u8> = (0..=255).collect();
        let mut writer = HeaderWriter::begin(Vec::new(), &blob(), data.len() as u64).unwrap();
        for chunk in data.chunks(7) {
            writer.push(chunk).unwrap();
        }
        let split = writer.finish().unwrap();
        assert_eq!(String::from_utf8(split).unwrap(), render("blob", &data).unwrap());
    }

    #[test]
    fn short_stream_is_rejected() {
        let mut writer = HeaderWriter::begin(Vec::new(), &blob(), 4).unwrap();
        writer.push(&[1, 2, 3]).unwrap();
        assert_eq!(writer.written(), 3);
        match writer.finish() {
            Err(EmbedError::LengthMismatch { declared, written }) => {
                assert_eq!(declared, 4);
                assert_eq!(written, 3);
            }
            other => panic!("expected length mismatch, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn long_stream_is_rejected() {
        let mut writer = HeaderWriter::begin(Vec::new(), &blob(), 1).unwrap();
        writer.push(&[1, 2]).unwrap();
        assert!(matches!(writer.finish(), Err(EmbedError::LengthMismatch { .. })));
    }

    #[test]
    fn symbol_validation() {
        assert!(is_valid_symbol("zcblive_dll"));
        assert!(is_valid_symbol("_x9"));
        assert!(!is_valid_symbol(""));
        assert!(!is_valid_symbol("9lives"));
        assert!(!is_valid_symbol("has-dash"));
        assert!(!is_valid_symbol("two words"));
        assert!(matches!(Symbol::new("bad name"), Err(EmbedError::InvalidSymbol(_))));
        assert_eq!(Symbol::new("payload").unwrap().as_str(), "payload");
    }

    #[test]
    fn keywords_are_not_symbols() {
        for word in ["int", "class", "const", "namespace", "and", "co_await"] {
            assert!(!is_valid_symbol(word), "{word}");
            assert!(matches!(render(word, &[1]), Err(EmbedError::InvalidSymbol(_))));
        }
        assert!(is_valid_symbol("integer"));
        assert!(is_valid_symbol("class_"));
    }
}
