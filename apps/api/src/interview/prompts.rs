// All LLM prompt constants for the interview module. Templates use
// `{placeholder}` markers; the builder functions below fill them in.
// Prompt assembly is pure — no side effects, deterministic given inputs.

/// Résumé extraction prompt. Replace `{resume_content}` before sending.
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract the following details from the resume content:
1. Skills
2. Work experience
3. Educational qualifications

Resume Content:
{resume_content}

Please provide a detailed JSON response with:
1. Professional skills (technical and soft skills)
2. Work experience details
3. Educational qualifications
4. Notable achievements or certifications

Strictly format as a JSON object with clear, concise information."#;

/// Question generation prompt.
/// Replace: `{skills}`, `{experience}`, `{education}` (JSON-encoded).
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"Generate 5 personalized interview questions exploring the candidate's background:

Skills: {skills}
Experience: {experience}
Education: {education}

Questions should:
- Be specific to the candidate's unique background
- Cover technical and soft skill aspects
- Encourage detailed responses
- Reveal problem-solving capabilities"#;

/// Candidate-background block embedded in the evaluation prompt when résumé
/// data is available. Replace: `{skills}`, `{experience_count}`,
/// `{technical_skills}`.
pub const CANDIDATE_CONTEXT_TEMPLATE: &str = r#"Candidate Background:
- Skills: {skills}
- Experience Level: {experience_count} years
- Technical Background: {technical_skills}"#;

/// Answer evaluation prompt.
/// Replace: `{context}` (may be empty), `{question}`, `{answer}`.
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"You are an experienced technical interviewer and career coach. Evaluate the following interview response
considering the candidate's background and the context of the question.

{context}

Question: {question}
Candidate's Answer: {answer}

Provide a comprehensive evaluation structured as follows:

1. Content Analysis:
- Key points effectively communicated
- Technical accuracy and depth of knowledge demonstrated
- Relevant experience and examples used
- Alignment with industry best practices

2. Communication Skills:
- Clarity and structure of the response
- Professional language and terminology usage
- Confidence and authority in presentation
- Balance between technical and non-technical explanation

3. Strategic Assessment:
- Alignment with what interviewers typically look for
- Understanding of the underlying business/technical context
- Problem-solving approach demonstrated
- Strategic thinking and decision-making shown

4. Specific Improvements:
- Missing key points or opportunities
- Alternative approaches or examples to consider
- Ways to make the answer more impactful
- Suggestions for better structuring the response

5. Follow-up Discussion:
- Natural follow-up questions this answer might prompt
- Areas worth exploring further
- Technical deep-dives that could be relevant
- Related scenarios to demonstrate broader knowledge

Keep feedback constructive, specific, and actionable. Focus on both immediate interview success
and long-term career development. If the answer involves technical concepts, evaluate both the
technical accuracy and the ability to communicate complex ideas effectively."#;

pub fn extraction_prompt(resume_content: &str) -> String {
    EXTRACTION_PROMPT_TEMPLATE.replace("{resume_content}", resume_content)
}

pub fn question_prompt(skills: &str, experience: &str, education: &str) -> String {
    QUESTION_PROMPT_TEMPLATE
        .replace("{skills}", skills)
        .replace("{experience}", experience)
        .replace("{education}", education)
}

pub fn candidate_context(skills: &str, experience_count: usize, technical_skills: &str) -> String {
    CANDIDATE_CONTEXT_TEMPLATE
        .replace("{skills}", skills)
        .replace("{experience_count}", &experience_count.to_string())
        .replace("{technical_skills}", technical_skills)
}

pub fn evaluation_prompt(context: &str, question: &str, answer: &str) -> String {
    EVALUATION_PROMPT_TEMPLATE
        .replace("{context}", context)
        .replace("{question}", question)
        .replace("{answer}", answer)
}
