#![allow(dead_code)]

// All LLM prompt constants for the analysis module. Templates use
// `{placeholder}` slots filled by the builder functions next to each
// operation. Cross-cutting fragments live in llm_client::prompts.

/// Marker separating the logic trace from the question list in
/// interview-question output. Both sides are required.
pub const SPLIT_MARKER: &str = "<<<SPLIT_HERE>>>";

pub const PERSONA_REFINE_SYSTEM: &str =
    "You are a senior HR expert who turns rough hiring criteria into polished, \
    professional recruiting copy. Preserve the original intent; elevate the wording. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Persona refinement template. Replace `{title}` and the seven field slots
/// before sending. Every property in the response is a required string.
pub const PERSONA_REFINE_TEMPLATE: &str = r#"Polish and professionalize the hiring criteria below for the role "{title}".

Current input:
- Core responsibilities: {responsibilities}
- Domain knowledge: {knowledge}
- Professional skills: {skills}
- Professional conduct: {literacy}
- Experience requirements: {experience}
- Warning traits to screen against: {warning_traits}
- Core capability tags: {core_tags}

Keep the meaning of each field; rewrite it as attractive, professional recruiting copy.

Return a JSON object with this EXACT schema (all values strings, no extra fields):
{
  "responsibilities": "...",
  "knowledge": "...",
  "skills": "...",
  "literacy": "...",
  "experience": "...",
  "warningTraits": "...",
  "coreTags": "..."
}"#;

pub const RESUME_PARSE_SYSTEM: &str =
    "You are a professional resume analyst. You reorganize resume content into a \
    standard report and extract a basic profile. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Resume structuring prompt. Appended after the resume content part(s).
pub const RESUME_PARSE_PROMPT: &str = r#"Reorganize the provided resume into the standard structure below and extract the basic profile.

NON-NEGOTIABLE RULES:
1. VERBATIM CARRY-OVER: for sections 3 (Work Experience), 4 (Project Experience), and 6 (Summary / Self-Evaluation), copy the candidate's original wording EXACTLY.
   - Do NOT shorten, rephrase, polish, summarize, or delete anything.
   - Do NOT rewrite bullets into STAR form unless the original is already written that way.
   - Keep every detail, number, and line break; the information must survive 100% intact.
2. STRUCTURE ONLY: your job is to sort existing content into the sections and to fill basicInfo with what the resume states. Never invent.

REPORT LAYOUT (Markdown, in this order):
1. Personal Information
   - Include: name, phone, email, city, personal links (GitHub etc.).
   - Never extract: national ID numbers, street-level addresses, political affiliation.
2. Education
   - Reverse chronological. School, major, degree, dates, GPA / scholarships.
3. Work Experience
   - Heading per entry: Company | Title | Dates
   - Body: the original text, pasted verbatim.
4. Project Experience
   - Heading per entry: Project | Role | Dates
   - Body: the original text, pasted verbatim.
5. Skills & Certifications
   - Technical skills, languages, professional qualifications.
6. Summary / Self-Evaluation
   - Body: the original text, pasted verbatim.

Return a JSON object with exactly two properties:
- "basicInfo": an object whose values are all strings, with the keys
  name, gender, age, school, major, education, graduationTime, workExperience,
  expectedSalary, expectedCity, jobIntent, maritalStatus, address, willingness,
  phone, email. Use "" for anything the resume does not state.
- "fullContent": the Markdown report laid out as above."#;

pub const ROUND_ONE_SYSTEM: &str =
    "ROLE: First-round interviewer (senior HR). \
    CORE TASK: initial screen against the role persona. \
    FOCUS: verifying persona fit, professional conduct, risk screening \
    (argumentative or evasive patterns), and baseline communication.";

pub const ROUND_TWO_SYSTEM: &str =
    "ROLE: Second-round interviewer (line-of-business owner). \
    CORE TASK: professional depth and business judgment. \
    FOCUS: probing core capabilities, business/technical thinking, grounding \
    answers in concrete scenarios, and posing live problems to talk through.";

pub const ROUND_FINAL_SYSTEM: &str =
    "ROLE: Final-round interviewer (company executive). \
    CORE TASK: hands-on verification and overall fit. \
    FOCUS: practical verification (must include a live written, coding, or \
    role-play exercise), self-review of past decisions, and holistic match.";

/// Highest-priority override block, included only when the interviewer has
/// corrected the generation logic by hand. Replace `{correction}`.
pub const MANUAL_OVERRIDE_TEMPLATE: &str = r#"
HIGHEST-PRIORITY INSTRUCTION — MANUAL CORRECTION:
The interviewer reviewed and revised the generation logic. IGNORE your own
automatic judgment and follow this corrected reasoning exactly:
"{correction}"
"#;

/// Interview-question template. Replace the slots, prepend the round-specific
/// system prompt, and keep the two-part output contract intact.
pub const QUESTIONS_TEMPLATE: &str = r#"Candidate: {candidate_name} (applying for: {job_title})
Role persona: {persona}
Core capability tags: {core_tags}
Resume content: {resume_text}
Prior interview history: {history}
{manual_override}
STRICT OUTPUT FORMAT:
Return two parts separated by "<<<SPLIT_HERE>>>", logic first, questions second.

Part 1: Logic trace
Briefly list the basis for each question (e.g. "based on the X project on the
resume...", "based on the persona's requirement for Y...").

<<<SPLIT_HERE>>>

Part 2: Questions
List exactly 5 concrete interview questions, each with the intent it probes.
This part must NEVER be empty."#;

pub const SUMMARY_TEMPLATE: &str = "Summarize the following interview notes:\n{notes}";

pub const ASSESSMENT_TEMPLATE: &str = "You are a seasoned interviewer. Write a professional \
    talent assessment based on these round {round} interview notes:\n{notes}";

pub const AUDIO_TEMPLATE: &str = "You are a senior interviewer's assistant. This recording is \
    from round {round} of an interview for the role {job_title}. Produce a conversation \
    summary and an evaluation of the candidate's performance.";

pub const FIT_SYSTEM: &str =
    "You are a chief talent officer with twenty years of hiring experience. \
    Skip pleasantries; produce a rigorous, direct report with real decision value. \
    Use Markdown.";

/// Comprehensive fit-analysis template. `{interview_context}` is rendered
/// from the candidate's recorded rounds.
pub const FIT_TEMPLATE: &str = r#"Run a full-dimension fit analysis for candidate {candidate_name} applying for the role {job_title}.

INPUT DATA:
1. Role persona standard:
{persona}

2. Candidate resume:
{resume_text}

3. Complete interview history (including recording summaries and evaluations):
{interview_context}

REQUIRED REPORT STRUCTURE:

### 1. Match Dashboard
- Overall score (0-100): give an estimated fit score.
- Key conclusion: one sentence (e.g. "Technical ability above expectations, but retention risk is high").

### 2. Competency Radar
Compare resume plus interview performance against the persona on:
- Hard skills: matches and gaps.
- Soft skills: communication, reasoning, composure (weigh interview evidence heavily).
- Experience overlap: how past work maps onto this role.

### 3. Red Flags
Screen for resume gaps, frequent job changes, contradictions between interview
rounds, and character concerns. Call out any negative signals from the
interview summaries explicitly.

### 4. Hiring Recommendation
- Verdict: strong hire / hire / proceed with caution / no hire.
- Follow-up: what to verify during a probation period if hired, or what the
  next interview round should probe if not yet decided."#;
