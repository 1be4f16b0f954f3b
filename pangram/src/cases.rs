/// One fixed pangram case: a phrase and the verdict it must produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case {
    pub name: &'static str,
    pub phrase: &'static str,
    pub expected: bool,
}

/// The six cases the harness runs, in order.
pub const CASES: &[Case] = &[
    Case {
        name: "test_pangram_empty",
        phrase: "",
        expected: false,
    },
    Case {
        name: "test_pangram_alpha",
        phrase: "abcdefghijklmnopqrstuvwxyz",
        expected: true,
    },
    Case {
        name: "test_pangram_punctuated",
        phrase: "abc, def! ghi... jkl25; mnopqrstuvwxyz",
        expected: true,
    },
    Case {
        name: "test_pangram_incomplete",
        phrase: "abcdefghijklmnopqrstuvwxy",
        expected: false,
    },
    Case {
        name: "test_pangram_mixed_case",
        phrase: "ABCdefGHIjklMNOpqrSTUvwxYZ",
        expected: true,
    },
    Case {
        // The misspelling is part of the case.
        name: "test_pangram_phrase",
        phrase: "the quick brown fox jumps over teh lazy dog",
        expected: true,
    },
];
