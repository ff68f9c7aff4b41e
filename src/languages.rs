use serde::Serialize;

use crate::error::CodeRunnerError;

/// A language the remote execution service understands, keyed by its
/// numeric language id.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub id: u16,
    pub name: &'static str,
    /// Syntax mode a code editor widget should highlight with.
    pub editor_mode: &'static str,
    #[serde(skip)]
    pub default_code: &'static str,
}

pub static LANGUAGES: [Language; 9] = [
    Language {
        id: 63,
        name: "JavaScript (Node.js)",
        editor_mode: "javascript",
        default_code: "// Welcome to CodeRunner!\nconsole.log(\"Hello, World!\");\n",
    },
    Language {
        id: 71,
        name: "Python 3",
        editor_mode: "python",
        default_code: "# Welcome to CodeRunner!\nprint(\"Hello, World!\")\n",
    },
    Language {
        id: 91,
        name: "Java",
        editor_mode: "java",
        default_code: r#"// Welcome to CodeRunner!
public class Main {
    public static void main(String[] args) {
        System.out.println("Hello, World!");
    }
}
"#,
    },
    Language {
        id: 54,
        name: "C++",
        editor_mode: "cpp",
        default_code: r#"// Welcome to CodeRunner!
#include <iostream>
using namespace std;

int main() {
    cout << "Hello, World!" << endl;
    return 0;
}
"#,
    },
    Language {
        id: 50,
        name: "C",
        editor_mode: "c",
        default_code: r#"// Welcome to CodeRunner!
#include <stdio.h>

int main() {
    printf("Hello, World!\n");
    return 0;
}
"#,
    },
    Language {
        id: 78,
        name: "Kotlin",
        editor_mode: "kotlin",
        default_code: r#"// Welcome to CodeRunner!
fun main() {
    println("Hello, World!")
}
"#,
    },
    Language {
        id: 72,
        name: "Ruby",
        editor_mode: "ruby",
        default_code: "# Welcome to CodeRunner!\nputs \"Hello, World!\"\n",
    },
    Language {
        id: 73,
        name: "Rust",
        editor_mode: "rust",
        default_code: r#"// Welcome to CodeRunner!
fn main() {
    println!("Hello, World!");
}
"#,
    },
    Language {
        id: 74,
        name: "TypeScript",
        editor_mode: "typescript",
        default_code: "// Welcome to CodeRunner!\nconsole.log(\"Hello, World!\");\n",
    },
];

impl Language {
    pub fn find(id: u16) -> Result<&'static Language, CodeRunnerError> {
        LANGUAGES
            .iter()
            .find(|lang| lang.id == id)
            .ok_or(CodeRunnerError::UnknownLanguage(id))
    }

    /// The language selected on page load.
    pub fn initial() -> &'static Language {
        &LANGUAGES[0]
    }
}
