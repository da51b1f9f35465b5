// V8 JavaScript engine license notice
// The embedded text matches the LICENSE.TXT shipped with the V8 source distribution

use crate::licenses::LicenseRecord;

/// Identifier the license registry uses for this record
pub const PROJECT: &str = "v8";

/// Name of the license file the embedded text was bundled from
pub const FILENAME: &str = "LICENSE.TXT";

/// Full text of the V8 license notice
pub const TEXT: &str = r#"This license applies to all parts of V8 that are not externally
maintained libraries.  The externally maintained libraries used by V8
are:

  - PCRE test suite, located in
    test/mjsunit/third_party/regexp-pcre.js.  This is based on the
    test suite from PCRE-7.3, which is copyrighted by the University
    of Cambridge and Google, Inc.  The copyright notice and license
    are embedded in regexp-pcre.js.

  - Layout tests, located in test/mjsunit/third_party.  These are
    based on layout tests from webkit.org which are copyrighted by
    Apple Computer, Inc. and released under a 3-clause BSD license.

  - Dtoa, located under third_party/dtoa.  This code is copyrighted by
    David M. Gay and released under an MIT license.

  - Strongtalk assembler, the basis of the files assembler-arm-inl.h,
    assembler-arm.cc, assembler-arm.h, assembler-ia32-inl.h,
    assembler-ia32.cc, assembler-ia32.h, assembler.cc and assembler.h.
    This code is copyrighted by Sun Microsystems Inc. and released
    under a 3-clause BSD license.

  - Valgrind client API header, located at third_party/valgrind/valgrind.h
    This is release under the BSD license.

These libraries have their own licenses; we recommend you read them,
as their terms may differ from the terms below.

Copyright 2006-2009, Google Inc. All rights reserved.
Redistribution and use in source and binary forms, with or without
modification, are permitted provided that the following conditions are
met:

    * Redistributions of source code must retain the above copyright
      notice, this list of conditions and the following disclaimer.
    * Redistributions in binary form must reproduce the above
      copyright notice, this list of conditions and the following
      disclaimer in the documentation and/or other materials provided
      with the distribution.
    * Neither the name of Google Inc. nor the names of its
      contributors may be used to endorse or promote products derived
      from this software without specific prior written permission.

THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS
"AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT
LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR
A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT
OWNER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL,
SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE,
DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY
THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT
(INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
"#;

/// The V8 license assembled into a registry record
pub const LICENSE: LicenseRecord = LicenseRecord {
    project: PROJECT,
    filename: FILENAME,
    text: TEXT,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_is_license_txt() {
        assert_eq!(FILENAME, "LICENSE.TXT");
    }

    #[test]
    fn test_text_names_copyright_holder() {
        assert!(!TEXT.is_empty());
        assert!(TEXT.contains("Google Inc."));
        assert!(TEXT.contains("Copyright 2006-2009, Google Inc. All rights reserved."));
    }

    #[test]
    fn test_text_lists_externally_maintained_libraries() {
        assert!(TEXT.contains("PCRE test suite"));
        assert!(TEXT.contains("Layout tests"));
        assert!(TEXT.contains("Dtoa"));
        assert!(TEXT.contains("Strongtalk assembler"));
        assert!(TEXT.contains("Valgrind client API header"));
    }

    #[test]
    fn test_text_carries_bsd_conditions_and_disclaimer() {
        assert!(TEXT.contains("Redistributions of source code must retain"));
        assert!(TEXT.contains("Redistributions in binary form must reproduce"));
        assert!(TEXT.contains("Neither the name of Google Inc."));
        assert!(TEXT
            .contains("THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS"));
    }

    #[test]
    fn test_text_is_newline_terminated_unix_text() {
        assert!(TEXT.ends_with('\n'));
        assert!(!TEXT.contains('\r'));
    }

    #[test]
    fn test_record_is_usable_in_const_context() {
        const RECORD: LicenseRecord = LICENSE;
        assert_eq!(RECORD.project, PROJECT);
        assert_eq!(RECORD.filename, FILENAME);
        assert_eq!(RECORD.text, TEXT);
    }
}
