//! Built-in machine configurations.
//!
//! The only configuration shipped today is the worked example carried over
//! from the reference automaton: a classifier that decides whether an input
//! over `{a, c, e, r}` is an anagram and/or a palindrome of the word
//! "racecar". The transition table is declarative data; the engine neither
//! knows nor cares what the states mean.

use crate::builder::MachineBuilder;
use crate::types::Direction::{Left, Right, Stay};
use crate::types::{StateKind, DEFAULT_BLANK_SYMBOL};

const BLANK: char = DEFAULT_BLANK_SYMBOL;

lazy_static::lazy_static! {
    static ref BUILTINS: Vec<(&'static str, fn() -> MachineBuilder)> = vec![
        ("racecar", racecar as fn() -> MachineBuilder),
    ];
}

/// Looks up a built-in machine configuration by name.
pub fn builtin(name: &str) -> Option<MachineBuilder> {
    BUILTINS
        .iter()
        .find(|(builtin_name, _)| *builtin_name == name)
        .map(|(_, factory)| factory())
}

/// Lists the names of all built-in machine configurations.
pub fn builtin_names() -> Vec<&'static str> {
    BUILTINS.iter().map(|(name, _)| *name).collect()
}

/// The "anagram and/or palindrome of racecar" classifier.
///
/// Phases of the computation, by state range:
/// - `q0`..`q1`: copy the ingested word onto the tape;
/// - `q2`..`q4`: fence the word between `$` and `#`;
/// - `q5`..`q21`: tally the letters of the word against the reference
///   letter counts `aaccerr`, appended after the `#`;
/// - `q22`..`q30`: compare against the literal reference word;
/// - `q31`..`q41`: classify the tally (exhausted counts mean anagram) and
///   stage the palindrome check behind a `|` fence;
/// - `q42`..`q62`: two-pointer palindrome scan crossing off with `x`.
///
/// Terminal accept states are `ANAGRAM`, `PALINDROME` (reached by the literal
/// match path) and `BOTH`. Halting anywhere else rejects the input.
pub fn racecar() -> MachineBuilder {
    let mut b = MachineBuilder::new();

    b.state("q0", StateKind::Initial);
    for i in 1..=62 {
        b.state(format!("q{i}"), StateKind::InProgress);
    }
    for label in ["ANAGRAM", "PALINDROME", "BOTH"] {
        b.state(label, StateKind::Accept);
    }

    b.input_symbols(['a', 'c', 'e', 'r']);
    b.tape_symbols(['$', '#', '1', '2', '3', '4', 'q', 's', 't', 'v', '|', 'x']);

    rules(&mut b);
    b
}

#[rustfmt::skip]
fn rules(t: &mut MachineBuilder) {
    // q0
    for c in ['a', 'c', 'e', 'r'] {
        t.copy("q0", c, "q1", Right);
    }
    // q1
    for c in ['a', 'c', 'e', 'r'] {
        t.copy("q1", c, "q1", Right);
    }
    t.rule("q1", BLANK, "q2", '#', Stay);
    // q2
    t.copy("q2", '#', "q3", Left);
    // q3
    for c in ['a', 'c', 'r', 'e'] {
        t.copy("q3", c, "q3", Left);
    }
    t.rule("q3", BLANK, "q4", '$', Stay);
    // q4
    t.copy("q4", '$', "q5", Right);
    // q5
    for c in ['e', 'c', 'r'] {
        t.copy("q5", c, "q5", Right);
    }
    t.copy("q5", '#', "q6", Left);
    t.rule("q5", 'a', "q5", '1', Right);
    // q6
    for c in ['c', 'q', 'e', 'r'] {
        t.copy("q6", c, "q6", Left);
    }
    t.copy("q6", '$', "q9", Right);
    t.rule("q6", '1', "q7", 'q', Right);
    // q7
    for c in ['r', '#', 'q', 'e', 'c', 'a'] {
        t.copy("q7", c, "q7", Right);
    }
    t.rule("q7", BLANK, "q8", 'a', Left);
    // q8
    t.copy("q8", 'a', "q8", Left);
    for c in ['#', 'c', 'e', 'r', 'q'] {
        t.copy("q8", c, "q6", Left);
    }
    // q9
    for c in ['q', 'r', 'e'] {
        t.copy("q9", c, "q9", Right);
    }
    t.copy("q9", '#', "q10", Left);
    t.rule("q9", 'c', "q9", '2', Right);
    // q10
    for c in ['e', 'a', 'r', 's', 'q'] {
        t.copy("q10", c, "q10", Left);
    }
    t.copy("q10", '$', "q13", Right);
    t.rule("q10", '2', "q11", 's', Right);
    // q11
    for c in ['s', 'a', '#', 'c', 'e', 'r', 'q'] {
        t.copy("q11", c, "q11", Right);
    }
    t.rule("q11", BLANK, "q12", 'c', Left);
    // q12
    t.copy("q12", 'a', "q12", Left);
    t.copy("q12", 'c', "q12", Left);
    for c in ['e', 'r', 's', 'q', '#'] {
        t.copy("q12", c, "q10", Left);
    }
    // q13
    for c in ['r', 'q', 's'] {
        t.copy("q13", c, "q13", Right);
    }
    t.copy("q13", '#', "q14", Left);
    t.rule("q13", 'e', "q13", '3', Right);
    // q14
    for c in ['t', 'q', 's', 'r', 'a', 'c'] {
        t.copy("q14", c, "q14", Left);
    }
    t.copy("q14", '$', "q17", Right);
    t.rule("q14", '3', "q15", 't', Right);
    // q15
    for c in ['r', 't', 'q', 'e', 's', '#', 'a', 'c'] {
        t.copy("q15", c, "q15", Right);
    }
    t.rule("q15", BLANK, "q16", 'e', Left);
    // q16
    for c in ['c', 'a', 'e'] {
        t.copy("q16", c, "q16", Left);
    }
    for c in ['#', 'q', 't', 's', 'r'] {
        t.copy("q16", c, "q14", Left);
    }
    // q17
    for c in ['s', 't', 'q'] {
        t.copy("q17", c, "q17", Right);
    }
    t.copy("q17", '#', "q18", Left);
    t.rule("q17", 'r', "q17", '4', Right);
    // q18
    for c in ['s', 'a', 't', 'v', 'q', 'c'] {
        t.copy("q18", c, "q18", Left);
    }
    t.copy("q18", '$', "q21", Right);
    t.rule("q18", '4', "q19", 'v', Right);
    // q19
    for c in ['#', 'r', 't', 'q', 'a', 's', 'e', 'v', 'c'] {
        t.copy("q19", c, "q19", Right);
    }
    t.rule("q19", BLANK, "q20", 'r', Left);
    // q20
    for c in ['c', 'e', 'a', 'r'] {
        t.copy("q20", c, "q20", Left);
    }
    for c in ['v', 's', 't', 'q', '#'] {
        t.copy("q20", c, "q18", Left);
    }
    // q21
    for c in ['t', 'q', 's', 'v'] {
        t.copy("q21", c, "q21", Right);
    }
    t.copy("q21", '#', "q22", Right);
    // q22
    t.copy("q22", 'a', "q23", Right);
    // q23
    t.copy("q23", 'a', "q24", Right);
    // q24
    t.copy("q24", 'c', "q25", Right);
    // q25
    t.copy("q25", 'c', "q26", Right);
    // q26
    t.copy("q26", 'e', "q27", Right);
    // q27
    t.copy("q27", 'r', "q28", Right);
    // q28
    t.copy("q28", 'r', "q29", Right);
    // q29
    t.rule("q29", BLANK, "q30", BLANK, Left);
    // q30
    for c in ['#', 'e', 'r', 'c', 'a'] {
        t.copy("q30", c, "q30", Left);
    }
    t.copy("q30", '$', "q31", Right);
    t.rule("q30", 't', "q30", 'e', Left);
    t.rule("q30", 's', "q30", 'c', Left);
    t.rule("q30", 'q', "q30", 'a', Left);
    t.rule("q30", 'v', "q30", 'r', Left);
    // q31
    t.copy("q31", 'e', "ANAGRAM", Right);
    t.copy("q31", 'c', "q39", Stay);
    t.copy("q31", 'a', "q39", Stay);
    t.copy("q31", 'r', "q32", Right);
    // q32
    t.copy("q32", 'a', "q33", Right);
    for c in ['e', 'r', 'c'] {
        t.copy("q32", c, "q38", Left);
    }
    // q33
    t.copy("q33", 'c', "q34", Right);
    for c in ['a', 'e', 'r'] {
        t.copy("q33", c, "q38", Left);
    }
    // q34
    t.copy("q34", 'e', "q35", Right);
    for c in ['a', 'c', 'r'] {
        t.copy("q34", c, "q38", Left);
    }
    // q35
    t.copy("q35", 'c', "q36", Right);
    for c in ['a', 'e', 'r'] {
        t.copy("q35", c, "q38", Left);
    }
    // q36
    t.copy("q36", 'a', "q37", Right);
    for c in ['c', 'e', 'r'] {
        t.copy("q36", c, "q38", Left);
    }
    // q37
    t.copy("q37", 'r', "PALINDROME", Right);
    for c in ['c', 'e', 'a'] {
        t.copy("q37", c, "q38", Left);
    }
    // q38
    for c in ['e', 'a', 'r', 'c'] {
        t.copy("q38", c, "q38", Left);
    }
    t.copy("q38", '$', "q39", Right);
    // q39
    t.copy("q39", 'e', "ANAGRAM", Right);
    for c in ['a', 'c', 'r'] {
        t.copy("q39", c, "q40", Right);
    }
    // q40
    for c in ['r', 'a', 'e', 'c', '#'] {
        t.copy("q40", c, "q40", Right);
    }
    t.rule("q40", BLANK, "q41", '|', Left);
    // q41
    for c in ['a', '#', 'c', 'e', 'r'] {
        t.copy("q41", c, "q41", Left);
    }
    t.copy("q41", '$', "q42", Right);
    // q42
    t.copy("q42", 'e', "q42", Right);
    t.copy("q42", '#', "q52", Right);
    t.rule("q42", 'r', "q43", 'x', Right);
    t.rule("q42", 'c', "q46", 'x', Right);
    t.rule("q42", 'a', "q49", 'x', Right);
    // q43
    for c in ['c', 'a', 'r', 'e', '#'] {
        t.copy("q43", c, "q43", Right);
    }
    t.copy("q43", '|', "q44", Right);
    // q44
    for c in ['a', 'r', 'c'] {
        t.copy("q44", c, "q44", Right);
    }
    t.rule("q44", BLANK, "q45", 'r', Left);
    // q45
    for c in ['a', 'e', 'r', '|', '#', 'c'] {
        t.copy("q45", c, "q45", Left);
    }
    t.copy("q45", 'x', "q42", Right);
    // q46
    for c in ['c', '#', 'e', 'a', 'r'] {
        t.copy("q46", c, "q46", Right);
    }
    t.copy("q46", '|', "q47", Right);
    // q47
    for c in ['c', 'a', 'r'] {
        t.copy("q47", c, "q47", Right);
    }
    t.rule("q47", BLANK, "q48", 'c', Left);
    // q48
    for c in ['c', 'r', '|', 'e', 'a', '#'] {
        t.copy("q48", c, "q48", Left);
    }
    t.copy("q48", 'x', "q42", Right);
    // q49
    for c in ['a', 'c', 'r', 'e', '#'] {
        t.copy("q49", c, "q49", Right);
    }
    t.copy("q49", '|', "q50", Right);
    // q50
    for c in ['c', 'r', 'a'] {
        t.copy("q50", c, "q50", Right);
    }
    t.rule("q50", BLANK, "q51", 'a', Left);
    // q51
    for c in ['r', '#', 'c', '|', 'e', 'a'] {
        t.copy("q51", c, "q51", Left);
    }
    t.copy("q51", 'x', "q42", Right);
    // q52
    for c in ['r', 'a', 'e', 'c'] {
        t.copy("q52", c, "q52", Right);
    }
    t.copy("q52", '|', "q53", Right);
    // q53
    t.copy("q53", 'x', "BOTH", Stay);
    t.rule("q53", 'a', "q54", 'x', Right);
    t.rule("q53", 'c', "q57", 'x', Right);
    t.rule("q53", 'r', "q60", 'x', Right);
    // q54
    for c in ['r', 'a', 'c', 'x'] {
        t.copy("q54", c, "q54", Right);
    }
    t.rule("q54", BLANK, "q55", BLANK, Left);
    // q55
    t.copy("q55", 'x', "q55", Left);
    t.copy("q55", 'r', "ANAGRAM", Stay);
    t.copy("q55", 'c', "ANAGRAM", Stay);
    t.rule("q55", 'a', "q56", 'x', Left);
    // q56
    for c in ['c', 'r', 'a'] {
        t.copy("q56", c, "q56", Left);
    }
    t.copy("q56", 'x', "q53", Right);
    // q57
    for c in ['r', 'a', 'c', 'x'] {
        t.copy("q57", c, "q57", Right);
    }
    t.rule("q57", BLANK, "q58", BLANK, Left);
    // q58
    t.copy("q58", 'x', "q58", Left);
    t.copy("q58", 'r', "ANAGRAM", Stay);
    t.copy("q58", 'a', "ANAGRAM", Stay);
    t.rule("q58", 'c', "q59", 'x', Left);
    // q59
    for c in ['c', 'r', 'a'] {
        t.copy("q59", c, "q59", Left);
    }
    t.copy("q59", 'x', "q53", Right);
    // q60
    for c in ['r', 'a', 'c', 'x'] {
        t.copy("q60", c, "q60", Right);
    }
    t.rule("q60", BLANK, "q61", BLANK, Left);
    // q61
    t.copy("q61", 'x', "q61", Left);
    t.copy("q61", 'c', "ANAGRAM", Stay);
    t.copy("q61", 'a', "ANAGRAM", Stay);
    t.rule("q61", 'r', "q62", 'x', Left);
    // q62
    for c in ['c', 'r', 'a'] {
        t.copy("q62", c, "q62", Left);
    }
    t.copy("q62", 'x', "q53", Right);
}
