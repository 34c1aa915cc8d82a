use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const CATEGORIES: &[(&str, &str)] = &[
    ("art", "ImageCategory::Art"),
    ("nature", "ImageCategory::Nature"),
    ("tech", "ImageCategory::Tech"),
];

#[derive(Deserialize)]
struct ContentFile {
    gallery: Vec<GalleryEntry>,
    #[serde(default)]
    skills: Vec<SkillEntry>,
    #[serde(default)]
    projects: Vec<ProjectEntry>,
}

#[derive(Deserialize)]
struct GalleryEntry {
    path: String,
    category: String,
    caption: String,
}

#[derive(Deserialize)]
struct SkillEntry {
    label: String,
    level: u32,
}

#[derive(Deserialize)]
struct ProjectEntry {
    slug: String,
    title: String,
    summary: String,
    link: String,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=FOLIO_CONTENT_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let content_path = resolve_content_path(workspace_root);
    println!("cargo:rerun-if-changed={}", content_path.display());

    let contents = fs::read_to_string(&content_path).unwrap_or_else(|err| {
        panic!(
            "failed to read site content at {}: {err}",
            content_path.display()
        )
    });

    let content: ContentFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse site content at {}: {err}",
            content_path.display()
        )
    });

    if content.gallery.is_empty() {
        panic!("site content {} has no gallery entries", content_path.display());
    }

    validate_gallery(&content.gallery, &content_path);
    validate_skills(&content.skills, &content_path);
    validate_projects(&content.projects, &content_path);

    let mut output = String::new();
    writeln!(&mut output, "pub const GALLERY_CATALOG: &[ImageDescriptor] = &[").unwrap();
    for entry in &content.gallery {
        writeln!(&mut output, "    ImageDescriptor {{").unwrap();
        writeln!(&mut output, "        path: {},", rust_string(&entry.path)).unwrap();
        writeln!(&mut output, "        category: {},", category_variant(&entry.category)).unwrap();
        writeln!(&mut output, "        caption: {},", rust_string(&entry.caption)).unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }
    writeln!(&mut output, "];").unwrap();
    writeln!(&mut output).unwrap();

    writeln!(&mut output, "pub const SKILLS: &[SkillEntry] = &[").unwrap();
    for entry in &content.skills {
        writeln!(&mut output, "    SkillEntry {{").unwrap();
        writeln!(&mut output, "        label: {},", rust_string(&entry.label)).unwrap();
        writeln!(&mut output, "        level: {},", entry.level).unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }
    writeln!(&mut output, "];").unwrap();
    writeln!(&mut output).unwrap();

    writeln!(&mut output, "pub const PROJECTS: &[ProjectEntry] = &[").unwrap();
    for entry in &content.projects {
        writeln!(&mut output, "    ProjectEntry {{").unwrap();
        writeln!(&mut output, "        slug: {},", rust_string(&entry.slug)).unwrap();
        writeln!(&mut output, "        title: {},", rust_string(&entry.title)).unwrap();
        writeln!(&mut output, "        summary: {},", rust_string(&entry.summary)).unwrap();
        writeln!(&mut output, "        link: {},", rust_string(&entry.link)).unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }
    writeln!(&mut output, "];").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("site_content.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_content_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("FOLIO_CONTENT_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("site/content.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn category_variant(raw: &str) -> &'static str {
    CATEGORIES
        .iter()
        .find(|(name, _)| *name == raw)
        .map(|(_, variant)| *variant)
        .unwrap_or_else(|| panic!("unknown gallery category '{raw}'"))
}

fn validate_gallery(entries: &[GalleryEntry], content_path: &Path) {
    let mut paths = HashSet::new();

    for entry in entries {
        if entry.path.trim().is_empty() {
            panic!("gallery path cannot be empty in {}", content_path.display());
        }
        if entry.path.starts_with("http://") || entry.path.starts_with("https://") {
            panic!(
                "gallery image '{}' cannot be a URL in {}",
                entry.path,
                content_path.display()
            );
        }
        if entry.path.starts_with("data:") {
            panic!(
                "gallery image '{}' cannot be a data URL in {}",
                entry.path,
                content_path.display()
            );
        }
        if !CATEGORIES.iter().any(|(name, _)| *name == entry.category) {
            panic!(
                "gallery image '{}' has unknown category '{}' in {}",
                entry.path,
                entry.category,
                content_path.display()
            );
        }
        if entry.caption.trim().is_empty() {
            panic!(
                "gallery image '{}' needs a caption in {}",
                entry.path,
                content_path.display()
            );
        }
        if !paths.insert(entry.path.clone()) {
            panic!(
                "duplicate gallery path '{}' in {}",
                entry.path,
                content_path.display()
            );
        }
    }
}

fn validate_skills(entries: &[SkillEntry], content_path: &Path) {
    for entry in entries {
        if entry.label.trim().is_empty() {
            panic!("skill label cannot be empty in {}", content_path.display());
        }
        if entry.level > 100 {
            panic!(
                "skill '{}' level {} is above 100 in {}",
                entry.label,
                entry.level,
                content_path.display()
            );
        }
    }
}

fn validate_projects(entries: &[ProjectEntry], content_path: &Path) {
    let mut slugs = HashSet::new();
    for entry in entries {
        if entry.slug.trim().is_empty() {
            panic!("project slug cannot be empty in {}", content_path.display());
        }
        if !slugs.insert(entry.slug.clone()) {
            panic!(
                "duplicate project slug '{}' in {}",
                entry.slug,
                content_path.display()
            );
        }
    }
}
