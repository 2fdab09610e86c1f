// src/renderer.rs
//! Pure LaTeX renderer: ResumeDocument -> complete LaTeX source
//!
//! A single linear pass over the document. Section order is fixed
//! (header, Education, Experience, Projects, Technical Skills) and every
//! sequence is emitted in input order. The renderer never fails and never
//! touches the filesystem; compilation is the compiler module's job.

use crate::escape;
use crate::types::{DescriptionPoint, Education, Experience, Profile, Project, ResumeDocument, Skills};

/// Static preamble: document class, packages and the resume layout macros.
/// Identical for every invocation.
const PREAMBLE: &str = r#"\documentclass[letterpaper,11pt]{article}

\usepackage{latexsym}
\usepackage[empty]{fullpage}
\usepackage{titlesec}
\usepackage{marvosym}
\usepackage[usenames,dvipsnames]{color}
\usepackage{verbatim}
\usepackage{enumitem}
\usepackage[hidelinks]{hyperref}
\usepackage{fancyhdr}
\usepackage[english]{babel}
\usepackage{tabularx}
\input{glyphtounicode}

\pagestyle{fancy}
\fancyhf{}
\fancyfoot{}
\renewcommand{\headrulewidth}{0pt}
\renewcommand{\footrulewidth}{0pt}

\addtolength{\oddsidemargin}{-0.5in}
\addtolength{\evensidemargin}{-0.5in}
\addtolength{\textwidth}{1in}
\addtolength{\topmargin}{-.5in}
\addtolength{\textheight}{1.0in}

\urlstyle{same}

\raggedbottom
\raggedright
\setlength{\tabcolsep}{0in}

\titleformat{\section}{
  \vspace{-4pt}\scshape\raggedright\large
}{}{0em}{}[\color{black}\titlerule \vspace{-5pt}]

\pdfgentounicode=1

\newcommand{\resumeItem}[1]{
  \item\small{
    {#1 \vspace{-2pt}}
  }
}

\newcommand{\resumeSubheading}[4]{
  \vspace{-2pt}\item
    \begin{tabular*}{0.97\textwidth}[t]{l@{\extracolsep{\fill}}r}
      \textbf{#1} & #2 \\
      \textit{\small#3} & \textit{\small #4} \\
    \end{tabular*}\vspace{-7pt}
}

\newcommand{\resumeProjectHeading}[2]{
    \item
    \begin{tabular*}{0.97\textwidth}{l@{\extracolsep{\fill}}r}
      \small#1 & #2 \\
    \end{tabular*}\vspace{-7pt}
}

\renewcommand\labelitemii{$\vcenter{\hbox{\tiny$\bullet$}}$}

\newcommand{\resumeSubHeadingListStart}{\begin{itemize}[leftmargin=0.15in, label={}]}
\newcommand{\resumeSubHeadingListEnd}{\end{itemize}}
\newcommand{\resumeItemListStart}{\begin{itemize}}
\newcommand{\resumeItemListEnd}{\end{itemize}\vspace{-5pt}}
"#;

/// Render a complete LaTeX document for the given resume.
pub fn render(doc: &ResumeDocument) -> String {
    let mut latex = String::with_capacity(PREAMBLE.len() + 4096);

    latex.push_str(PREAMBLE);
    latex.push_str("\n\\begin{document}\n");

    latex.push_str(&render_header(&doc.profile));

    latex.push_str("\\section{Education}\n\\resumeSubHeadingListStart\n");
    latex.push_str(&render_education(&doc.education));
    latex.push_str("\\resumeSubHeadingListEnd\n");

    latex.push_str("\\section{Experience}\n\\resumeSubHeadingListStart\n");
    latex.push_str(&render_experience(&doc.experience));
    latex.push_str("\\resumeSubHeadingListEnd\n");

    latex.push_str("\\section{Projects}\n\\resumeSubHeadingListStart\n");
    latex.push_str(&render_projects(&doc.project));
    latex.push_str("\\resumeSubHeadingListEnd\n");

    latex.push_str(&render_skills(&doc.skills));

    latex.push_str("\\end{document}\n");
    latex
}

fn hyperlink(target: &str, label: &str) -> String {
    format!(
        "\\href{{{}}}{{\\underline{{{}}}}}",
        escape::url(target),
        escape::latex(label)
    )
}

fn render_header(profile: &Profile) -> String {
    let socials = profile
        .socials
        .iter()
        .map(|s| hyperlink(&s.link_to_profile, &s.platform_name))
        .collect::<Vec<_>>()
        .join(" $|$ ");

    format!(
        "\\begin{{center}}\n\
         \\textbf{{\\Huge \\scshape {}}} \\\\ \\vspace{{1pt}}\n\
         \\small {} $|$ \\href{{mailto:{}}}{{\\underline{{{}}}}} $|$ {}\n\
         \\end{{center}}\n",
        escape::latex(&profile.full_name),
        escape::latex(&profile.phone_no),
        escape::url(&profile.email),
        escape::latex(&profile.email),
        socials
    )
}

fn render_education(entries: &[Education]) -> String {
    let mut out = String::new();
    for edu in entries {
        out.push_str(&format!(
            "  \\resumeSubheading{{{}}}{{{} -- {}}}{{{}}}{{{}}}\n",
            escape::latex(&edu.name),
            escape::latex(&edu.start_year),
            escape::latex(&edu.end_year),
            escape::latex(&edu.degree),
            escape::latex(&edu.grade)
        ));
    }
    out
}

fn render_item_list(points: &[DescriptionPoint]) -> String {
    let mut out = String::new();
    out.push_str("  \\resumeItemListStart\n");
    for point in points {
        out.push_str(&format!(
            "    \\resumeItem{{{}}}\n",
            escape::latex(&point.points)
        ));
    }
    out.push_str("  \\resumeItemListEnd\n");
    out
}

fn render_experience(entries: &[Experience]) -> String {
    let mut out = String::new();
    for exp in entries {
        out.push_str(&format!(
            "  \\resumeSubheading{{{}}}{{{} -- {}}}{{{}}}{{{}}}\n",
            escape::latex(&exp.position),
            escape::latex(&exp.start_date),
            escape::latex(&exp.end_date),
            escape::latex(&exp.company_name),
            escape::latex(&exp.location)
        ));
        out.push_str(&render_item_list(&exp.description));
    }
    out
}

fn render_projects(entries: &[Project]) -> String {
    let mut out = String::new();
    for proj in entries {
        out.push_str(&format!(
            "  \\resumeProjectHeading{{\\textbf{{{}}} $|$ \\emph{{{}}}}}{{{}}}\n",
            escape::latex(&proj.name),
            escape::latex(&proj.tech_stack),
            hyperlink(&proj.link_to_project, "Live")
        ));
        out.push_str(&render_item_list(&proj.description));
    }
    out
}

fn render_skills(skills: &Skills) -> String {
    let join = |names: &[crate::types::SkillName]| {
        names
            .iter()
            .map(|s| escape::latex(&s.name))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut out = String::new();
    out.push_str("\\section{Technical Skills}\n");
    out.push_str("\\begin{itemize}[leftmargin=0.15in, label={}]\n");
    out.push_str("\\small{\\item{\n");
    out.push_str(&format!(
        "\\textbf{{Languages}}: {} \\\\\n",
        join(&skills.tech_skills)
    ));
    out.push_str(&format!(
        "\\textbf{{Frameworks}}: {} \\\\\n",
        join(&skills.frameworks)
    ));
    out.push_str(&format!(
        "\\textbf{{Developer Tools}}: {} \\\\\n",
        join(&skills.developer_tools)
    ));
    out.push_str(&format!("\\textbf{{Libraries}}: {}\n", join(&skills.libraries)));
    out.push_str("}}\n\\end{itemize}\n");
    out
}
