//! Built-in system templates

use promptstore::Category;

use super::Template;

/// The nine templates shipped with the tool
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template {
            id: "api-doc-1",
            name: "Generate API docs",
            description: "Generate API documentation",
            category: Category::Docs,
            body: "Please generate detailed documentation for the following API function:\n\n\
                   Function: {{functionName}}\n\
                   Language: {{language}}\n\
                   Code:\n```{{language}}\n{{code}}\n```\n\n\
                   Please include:\n\
                   1. Function description\n\
                   2. Parameter descriptions\n\
                   3. Return value\n\
                   4. Usage examples\n\
                   5. Error cases",
            variables: &["functionName", "code", "language"],
            languages: &["javascript", "typescript", "python", "java"],
        },
        Template {
            id: "explain-code-1",
            name: "Explain code",
            description: "Explain what this code does",
            category: Category::Review,
            body: "Please explain in detail what the following {{language}} code does:\n\n\
                   ```{{language}}\n{{code}}\n```\n\n\
                   Please include:\n\
                   1. The overall purpose of the code\n\
                   2. The key logic\n\
                   3. What the variables and functions are for\n\
                   4. Possible improvements",
            variables: &["code", "language"],
            languages: &[],
        },
        Template {
            id: "optimize-code-1",
            name: "Optimize code",
            description: "Optimize this code",
            category: Category::Optimize,
            body: "Please optimize the following {{language}} code to improve quality and performance:\n\n\
                   ```{{language}}\n{{code}}\n```\n\n\
                   Goals:\n\
                   1. Improve readability\n\
                   2. Improve performance\n\
                   3. Follow best practices\n\
                   4. Reduce complexity",
            variables: &["code", "language"],
            languages: &[],
        },
        Template {
            id: "add-comments-1",
            name: "Add comments",
            description: "Add comments to code",
            category: Category::Docs,
            body: "Please add thorough comments to the following {{language}} code:\n\n\
                   ```{{language}}\n{{code}}\n```\n\n\
                   Please include:\n\
                   1. What each function or class does\n\
                   2. Parameter descriptions\n\
                   3. Return value descriptions\n\
                   4. Inline comments on key logic",
            variables: &["code", "language"],
            languages: &[],
        },
        Template {
            id: "unit-test-1",
            name: "Generate unit tests",
            description: "Generate unit tests",
            category: Category::Test,
            body: "Please generate complete unit tests for the following {{language}} code:\n\n\
                   Code:\n```{{language}}\n{{code}}\n```\n\n\
                   Please include:\n\
                   1. Test cases for the normal path\n\
                   2. Test cases for boundary conditions\n\
                   3. Test cases for error conditions\n\
                   4. An appropriate test framework",
            variables: &["code", "language"],
            languages: &["javascript", "typescript", "python", "java"],
        },
        Template {
            id: "code-review-1",
            name: "Code review",
            description: "Code review",
            category: Category::Review,
            body: "Please review the following {{language}} code and point out potential problems:\n\n\
                   Code:\n```{{language}}\n{{code}}\n```\n\n\
                   Please focus on:\n\
                   1. Code quality and readability\n\
                   2. Performance issues\n\
                   3. Security issues\n\
                   4. Best practices\n\
                   5. Potential bugs",
            variables: &["code", "language"],
            languages: &[],
        },
        Template {
            id: "bug-fix-1",
            name: "Fix bug",
            description: "Bug fixing",
            category: Category::Bugfix,
            body: "The following {{language}} code has a bug. Please analyze and fix it:\n\n\
                   Code:\n```{{language}}\n{{code}}\n```\n\n\
                   Please provide:\n\
                   1. Root cause analysis\n\
                   2. A fix\n\
                   3. The corrected code\n\
                   4. Testing suggestions",
            variables: &["code", "language"],
            languages: &[],
        },
        Template {
            id: "refactor-1",
            name: "Refactor code",
            description: "Code refactoring",
            category: Category::Optimize,
            body: "Please refactor the following {{language}} code to improve its quality:\n\n\
                   Code:\n```{{language}}\n{{code}}\n```\n\n\
                   Goals:\n\
                   1. Improve readability\n\
                   2. Improve maintainability\n\
                   3. Improve performance\n\
                   4. Follow best practices",
            variables: &["code", "language"],
            languages: &[],
        },
        Template {
            id: "optimize-1",
            name: "Performance tuning",
            description: "Performance optimization",
            category: Category::Optimize,
            body: "Please optimize the performance of the following {{language}} code:\n\n\
                   Code:\n```{{language}}\n{{code}}\n```\n\n\
                   Directions:\n\
                   1. Time complexity\n\
                   2. Space complexity\n\
                   3. Algorithm choice\n\
                   4. Caching strategy",
            variables: &["code", "language"],
            languages: &[],
        },
    ]
}
