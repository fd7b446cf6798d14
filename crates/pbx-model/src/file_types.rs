//! Static extension-to-file-type mapping.
//!
//! Xcode tags every file reference with a file type identifier. The sync
//! layer always sets the type explicitly (never leaves it to be inferred
//! by the consumer), so the table only needs to cover the extensions the
//! tool is willing to reference.

/// Known (extension, Xcode file type) pairs.
///
/// Kept as data rather than behavior; extensions not listed here fall
/// back to plain `text`.
pub const EXPLICIT_FILE_TYPES: &[(&str, &str)] = &[
    ("a", "archive.ar"),
    ("app", "wrapper.application"),
    ("bundle", "wrapper.plug-in"),
    ("c", "sourcecode.c.c"),
    ("cpp", "sourcecode.cpp.cpp"),
    ("dylib", "compiled.mach-o.dylib"),
    ("framework", "wrapper.framework"),
    ("h", "sourcecode.c.h"),
    ("m", "sourcecode.c.objc"),
    ("markdown", "net.daringfireball.markdown"),
    ("mdimporter", "wrapper.cfbundle"),
    ("mm", "sourcecode.cpp.objcpp"),
    ("octest", "wrapper.cfbundle"),
    ("pch", "sourcecode.c.h"),
    ("plist", "text.plist.xml"),
    ("sh", "text.script.sh"),
    ("swift", "sourcecode.swift"),
    ("xcassets", "folder.assetcatalog"),
    ("xcconfig", "text.xcconfig"),
    ("xcdatamodel", "wrapper.xcdatamodel"),
    ("xcodeproj", "wrapper.pb-project"),
    ("xctest", "wrapper.cfbundle"),
    ("xib", "file.xib"),
];

/// Fallback type for extensions the table does not know.
pub const FALLBACK_FILE_TYPE: &str = "text";

/// Look up the Xcode file type for an extension.
pub fn for_extension(extension: &str) -> &'static str {
    EXPLICIT_FILE_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, ty)| *ty)
        .unwrap_or(FALLBACK_FILE_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extension() {
        assert_eq!(for_extension("a"), "archive.ar");
        assert_eq!(for_extension("framework"), "wrapper.framework");
        assert_eq!(for_extension("m"), "sourcecode.c.objc");
    }

    #[test]
    fn test_unknown_extension_falls_back_to_text() {
        assert_eq!(for_extension("txt"), FALLBACK_FILE_TYPE);
        assert_eq!(for_extension(""), FALLBACK_FILE_TYPE);
    }
}
