// All prompt templates for the Generation module.
// Placeholders use {name} and are filled with str::replace at the call sites.

/// Motivational letter prompt.
/// Replace `{job_title}`, `{job_context}`, `{language_instruction}` before sending.
pub const LETTER_PROMPT_TEMPLATE: &str = r#"You are a professional career advisor helping a job applicant write a brief motivational letter.
Create a compelling motivational letter for a {job_title} position.

{job_context}

{language_instruction}

The motivational letter should:
1. Explain why the candidate is interested in this position/company
2. Highlight their relevant skills and qualifications without listing their entire resume
3. Demonstrate understanding of the role and industry
4. Express enthusiasm and passion for the field
5. Explain what makes them a unique fit for this position
6. Include a professional opening and closing
7. Be 1-2 paragraphs in length
8. Have a confident but not arrogant tone

Focus on explaining motivation and fit rather than detailed work history."#;

/// Job-description block for the letter prompts, included only when the
/// request carried a non-blank description. Replace `{job_description}`.
pub const JOB_DESCRIPTION_CONTEXT: &str = r#"The job description is as follows:
{job_description}

Use specific details from this job description in the letter."#;

/// Cover letter prompt.
/// Replace `{job_title}`, `{company_context}`, `{job_context}`, `{language_instruction}`.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"You are a professional career advisor helping a job applicant write a cover letter.
Write a complete cover letter for a {job_title} position.

{company_context}

{job_context}

{language_instruction}

The cover letter should:
1. Open with a clear statement of the position being applied for
2. Connect the candidate's background to the needs of the role
3. Keep a professional, confident tone throughout
4. Close with a call to action and a formal sign-off
5. Be 3-4 short paragraphs

Address it to the hiring team unless a contact person is named in the job description."#;

/// Company block for the cover letter, included only when the request carried
/// a non-blank company name. Replace `{company}`.
pub const COMPANY_CONTEXT: &str = r#"The candidate is applying to {company}.
Mention the company by name and tailor the letter to it."#;

/// Per-job resume analysis prompt.
/// Replace `{job_title}`, `{resume}`, `{job_context}`, `{extra_instructions}`,
/// `{language_instruction}`.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert resume reviewer and career advisor.
Analyze how well the following resume matches the {job_title} position.

Resume:
{resume}

{job_context}

{extra_instructions}

{language_instruction}

Provide:
1. A match score from 0 to 100 with a short justification
2. The candidate's strongest qualifications for this role
3. The most important gaps or missing qualifications
4. Concrete suggestions to improve the resume for this position

Keep the analysis under 300 words."#;

/// Job-description block for the analysis and interview prompts.
/// Replace `{job_description}`.
pub const ANALYSIS_JOB_CONTEXT: &str = r#"Job description:
{job_description}"#;

/// Candidate-supplied instructions block for the analysis prompt, included
/// only when non-blank. Replace `{custom_instructions}`.
pub const CUSTOM_INSTRUCTIONS_CONTEXT: &str = r#"Additional instructions from the candidate:
{custom_instructions}"#;

/// ATS compatibility prompt, run once over the resume alone.
/// Replace `{resume}`, `{language_instruction}`.
pub const ATS_PROMPT_TEMPLATE: &str = r#"You are an ATS (Applicant Tracking System) specialist.
Evaluate the following resume for ATS compatibility.

Resume:
{resume}

{language_instruction}

Cover:
1. Formatting issues that could prevent correct parsing
2. Keyword coverage and placement
3. Section naming and ordering
4. Three specific changes that would improve the ATS score

Keep the evaluation under 250 words."#;

/// Interview preparation prompt.
/// Replace `{job_title}`, `{job_context}`, `{language_instruction}`.
pub const INTERVIEW_PROMPT_TEMPLATE: &str = r#"You are an experienced interviewer and career coach.
Prepare a candidate for a {job_title} interview.

{job_context}

{language_instruction}

List the 8 most likely interview questions for this position.
For each question, give 2-3 sentences of guidance on what a strong answer covers.
Include a mix of technical, behavioral, and role-specific questions."#;
