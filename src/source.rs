use std::fs;

pub struct Source {
    pub name: String,
    pub content: String,
}

pub fn file(path: &str) -> Result<Source, &'static str> {
    let content = fs::read_to_string(path).map_err(|_| "Could not read source file")?;
    Ok(Source {
        name: String::from(path),
        content,
    })
}

pub fn text(text: &str) -> Source {
    Source {
        name: String::from("<text>"),
        content: String::from(text),
    }
}

impl Source {
    pub fn chars(&self) -> Vec<char> {
        self.content.chars().collect()
    }

    pub fn short_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}
