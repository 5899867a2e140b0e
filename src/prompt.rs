//! Fixed prompt templates sent to the model.
//!
//! Caller-supplied text (page HTML, persona fields, URLs) is interpolated
//! verbatim: nothing is escaped, sanitized or truncated.

use crate::api::models::PersonaTestCaseRequest;

/// Role-setting text shared by both templates.
pub const TESTER_PREAMBLE: &str = "You are a professional ADA (Americans with Disabilities Act) tester with 10 years of experience in accessibility testing for visual, auditory, motor, cognitive, and neurological impairments. You can write comprehensive ADA test cases by analyzing a website's HTML code and considering different personas with disabilities in simple English language.";

// Verbatim, including the missing comma after "message".
const TEST_CASES_GENERATED: &str = r#"{
"message": []
"personas": [
    {
    "name": "[Persona]",
    "test_cases": [
        {
        "id": 1,
        "objective": "[Objective of Test Case 1]",
        "preconditions": "[Preconditions for Test Case 1]",
        "steps": [
            "[Step 1 description]",
            "[Step 2 description]",
            ...
        ]
        },
        {
        "id": 2,
        "objective": "[Objective of Test Case 2]",
        "preconditions": "[Preconditions for Test Case 2]",
        "steps": [
            "[Step 1 description]",
            "[Step 2 description]",
            ...
        ]
        },
        ...
    ]
    },
    ...
]
}"#;

const TEST_CASES_NOT_GENERATED: &str = r#"{
  "messages": [
    {
      "type": "ERROR",
      "detail": "ERROR occured"
    }
  ],
  "personas": []
}"#;

const FEATURE_GENERATED: &str = r#"{
  "messages": [],
  "feature": {
    "name": "[Feature name]",
    "persona": "[Persona]",
    "page_url": "[Page URL]",
    "description": "[As a <persona>, I want <goal>, so that <benefit>]",
    "background": [
      "[Given step shared by every scenario]"
    ],
    "scenarios": [
      {
        "id": 1,
        "objective": "[Objective this scenario covers]",
        "title": "[Scenario title]",
        "given": ["[Precondition]", ...],
        "when": ["[Action]", ...],
        "then": ["[Expected outcome]", ...]
      },
      ...
    ]
  }
}"#;

const FEATURE_NOT_GENERATED: &str = r#"{
  "messages": [
    {
      "type": "ERROR",
      "detail": "[Why no feature file could be generated]"
    }
  ],
  "feature": null
}"#;

const FEATURE_EXAMPLE: &str = r#"{
  "messages": [],
  "feature": {
    "name": "Accessible product search",
    "persona": "Visual Impairment",
    "page_url": "https://shop.example.com/search",
    "description": "As a screen reader user, I want to search the catalogue and understand the results, so that I can choose a product without sighted help.",
    "background": [
      "Given I am using a screen reader with default settings",
      "And I have opened https://shop.example.com/search"
    ],
    "scenarios": [
      {
        "id": 1,
        "objective": "To verify that all images have descriptive alt text for visually impaired users.",
        "title": "Product thumbnails are announced with meaningful alternative text",
        "given": ["Given the search results list is displayed"],
        "when": ["When I move the screen reader cursor onto a product thumbnail"],
        "then": [
          "Then the screen reader announces the product name and a short description",
          "And no image is announced only by its file name"
        ]
      },
      {
        "id": 2,
        "objective": "To verify that the website is keyboard accessible.",
        "title": "Search can be completed with the keyboard alone",
        "given": ["Given focus is on the page body"],
        "when": [
          "When I press Tab until the search field has focus",
          "And I type \"headphones\" and press Enter"
        ],
        "then": [
          "Then the results are loaded",
          "And the number of results is announced through a live region",
          "And focus moves to the results heading"
        ]
      }
    ]
  }
}"#;

/// A prompt as sent to the model: the role preamble followed by the
/// instruction body, as two separate text parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub preamble: &'static str,
    pub body: String,
}

impl Prompt {
    pub fn len(&self) -> usize {
        self.preamble.len() + self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Prompt asking for ADA test cases for every persona relevant to `html`.
pub fn ada_test_cases(html: &str) -> Prompt {
    let mut body = String::with_capacity(html.len() + 2048);
    body.push_str("Analyze the provided website's HTML code and identify the personas for which ADA test cases are required based on the website's content and structure. Generate comprehensive test cases only for the relevant personas in the specified output format.\n\n");
    body.push_str("Output JSON Format (if test cases are generated):\n");
    body.push_str(TEST_CASES_GENERATED);
    body.push_str("\n\nOutput JSON Format (if no test cases are generated or no applicable personas):\n");
    body.push_str(TEST_CASES_NOT_GENERATED);
    body.push_str("\n\nWebsite HTML:\n### ");
    body.push_str(html);
    body.push_str(" ###\n\n");
    body.push_str("Please ensure that the generated test cases cover all relevant accessibility scenarios for the identified personas based on the website's HTML structure and content. If a particular persona is not applicable or relevant based on the analysis, do not include test cases for that persona.\n");

    Prompt {
        preamble: TESTER_PREAMBLE,
        body,
    }
}

/// Prompt asking for a BDD feature file, as JSON, covering the persona's objectives.
pub fn persona_feature(request: &PersonaTestCaseRequest) -> Prompt {
    let objectives = request
        .objectives
        .iter()
        .enumerate()
        .map(|(i, objective)| format!("{}. {}\n", i + 1, objective))
        .collect::<String>();

    let body = format!(
        "Write a BDD (Behaviour Driven Development) feature file, expressed as JSON, with Given/When/Then scenarios that test the web page below for the persona described. Write at least one scenario for every objective and keep each step in simple English.\n\n\
         Persona: {name}\n\n\
         Objectives:\n{objectives}\n\
         Web page URL: {url}\n\n\
         Output JSON Format (if the feature file is generated):\n{generated}\n\n\
         Output JSON Format (if the feature file cannot be generated):\n{not_generated}\n\n\
         Example of a complete output:\n{example}\n\n\
         Respond with the JSON document only, without any surrounding text or formatting.\n",
        name = request.name,
        objectives = objectives,
        url = request.page_weburl,
        generated = FEATURE_GENERATED,
        not_generated = FEATURE_NOT_GENERATED,
        example = FEATURE_EXAMPLE,
    );

    Prompt {
        preamble: TESTER_PREAMBLE,
        body,
    }
}
