//! Resume export: flattens the resume into a plain-text document.
//!
//! Section order is fixed: header, summary, experience, education, skills,
//! certifications. Output is deterministic for a given content store.

use std::fmt::{self, Write};

use crate::models::resume::ResumeDocument;

pub const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// `Your Name` -> `Your_Name_Resume.txt`.
pub fn file_name(person: &str) -> String {
    let stem = person.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{stem}_Resume.txt")
}

pub fn export_text(doc: &ResumeDocument<'_>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_document(&mut out, doc)?;
    Ok(out.trim().to_string())
}

fn write_document(out: &mut impl Write, doc: &ResumeDocument<'_>) -> fmt::Result {
    let p = doc.personal;
    let r = doc.resume;

    writeln!(out, "{}", p.name)?;
    writeln!(out, "{}", p.title)?;
    writeln!(out, "{} | {} | {}", p.email, p.phone, p.location)?;
    writeln!(out, "{} | {} | {}", p.website, p.linkedin, p.github)?;

    section(out, "PROFESSIONAL SUMMARY")?;
    writeln!(out, "{}", r.summary.trim())?;

    section(out, "EXPERIENCE")?;
    for exp in &r.experience {
        writeln!(out)?;
        writeln!(out, "{} | {} | {}", exp.title, exp.company, exp.location)?;
        writeln!(out, "{}", exp.duration)?;
        bullets(out, &exp.responsibilities)?;
        writeln!(out, "Technologies: {}", exp.technologies.join(", "))?;
    }

    section(out, "EDUCATION")?;
    for edu in &r.education {
        writeln!(out)?;
        writeln!(out, "{} | {} | {}", edu.degree, edu.institution, edu.location)?;
        writeln!(out, "{} | GPA: {}", edu.duration, edu.gpa)?;
        bullets(out, &edu.achievements)?;
    }

    section(out, "SKILLS")?;
    writeln!(out)?;
    for skill in &r.skills {
        writeln!(out, "{}: {}", skill.category, skill.items.join(", "))?;
    }

    section(out, "CERTIFICATIONS")?;
    for cert in &r.certifications {
        writeln!(out)?;
        writeln!(out, "{} | {} | {}", cert.name, cert.issuer, cert.date)?;
        writeln!(out, "Credential ID: {}", cert.credential_id)?;
    }

    Ok(())
}

fn section(out: &mut impl Write, title: &str) -> fmt::Result {
    write!(out, "\n{title}\n")
}

fn bullets(out: &mut impl Write, items: &[String]) -> fmt::Result {
    for item in items {
        writeln!(out, "• {item}")?;
    }
    Ok(())
}
