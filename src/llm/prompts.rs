//! Fixed instructional prompt for resume / job description matching

/// Prompt templates for the matching pipeline. The analysis prompt asks the
/// model for five sections, each rendered as a markdown table.
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub match_analysis: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            match_analysis: MATCH_ANALYSIS_TEMPLATE.to_string(),
        }
    }
}

/// Parameters for prompt template substitution
#[derive(Debug, Clone)]
pub struct PromptParams {
    pub resume_content: String,
    pub job_content: String,
}

impl PromptTemplates {
    /// Render the full analysis prompt. Both inputs are embedded verbatim;
    /// no sanitization or truncation happens here.
    pub fn render_match_analysis(&self, params: &PromptParams) -> String {
        self.match_analysis
            .replace("{job}", &params.job_content)
            .replace("{resume}", &params.resume_content)
    }
}

const MATCH_ANALYSIS_TEMPLATE: &str = r#"I am applying for a job and want to optimize my resume for better alignment with the job description. Follow these structured steps carefully to analyze, compare, and refine my resume, keeping it natural, human-like, and ATS-friendly. Your output should be clean, concise, and strictly in markdown table format for all relevant sections.

---

### 1. Extract Responsibilities & Qualifications
- Identify all core responsibilities and qualifications from the job description.
- Distinguish between Required and Preferred or "Nice to Have" qualifications.
- Present both categories in separate markdown tables with two columns:
  - Column 1: Category (Responsibility or Qualification)
  - Column 2: Extracted Text

---

### 2. Mismatch Analysis (Tabular Format)
- Compare my resume line-by-line with the job qualifications (from Required and Preferred).
- Use my work experience section and skills section to find matches.
- Use this scoring rule:
  - 80-100% = Clearly mentioned or strongly implied
  - 50-79% = Partially related or indirectly referenced
  - <50% = Missing or unclear

- Present the output in a markdown table with these columns:
  - Column 1: Job Qualification
  - Column 2: Resume Match % Estimate
  - Column 3: Match (🟢 Yes / 🟡 Partial / 🔴 No)

Use markdown table syntax only. Do not include any extra text before or after the table.

At the end of this section, give an Approximate ATS Match Score (0-100%) based on overall alignment with the job, on its own line in the form "ATS Match Score: NN%".

---

### 3. Experience Refinement (Bullet Point Adjustments)
- Only use my work experience section for this task.
- For each company, review all bullets. Modify bullets to better reflect the job description without overexaggerating.
- If multiple bullets in the same job need changes, include all of them.
- Preserve authenticity while improving ATS friendliness.

Present your suggestions in a markdown table with these columns:
  - Column 1: Company Name
  - Column 2: Original Bullet
  - Column 3: Modified Bullet
  - Column 4: Reason for Change

Do not use bullet points or explanations outside the table.

---

### 4. Change Log for Bullet Points
- Track only those bullets that were actually modified in the Experience Refinement section.
- Skip any bullets that remained unchanged.
- Present them clearly and concisely.

Format this as a markdown table with 3 columns:
  - Company Name
  - What Was Changed
  - Why

---

### 5. Skills Section Enhancement
- Analyze my current skills section.
- Suggest additions, adjustments, or removals based on the job description.
- Focus on tools, platforms, certifications, and relevant buzzwords.
- Prioritize industry keywords and CRM/digital/data stack tools if applicable.
- If a preferred/bonus skill is not harmful, retain it rather than remove it.

Present this in a markdown table with 3 columns:
  - Existing Skill
  - Suggested Action (Keep, Remove, Replace, Add)
  - Reason / JD Relevance

---

Important guidelines:
- Use markdown tables only for structured data.
- Maintain a human, natural tone in refinements.
- Keep suggestions ATS-friendly and realistic.
- Do not include introductory text before tables.

---

Now, analyze and refine the resume below using the job description provided.

Job Description:
{job}

Resume:
{resume}
"#;
