//! Templated script text.

/// Minute at which the main section ends: `⌊duration × 0.8⌋`.
#[must_use]
pub fn main_content_end(duration_minutes: u32) -> u32 {
    duration_minutes * 4 / 5
}

/// Render the canned script for `topic` at `duration_minutes`.
#[must_use]
pub fn render(topic: &str, duration_minutes: u32) -> String {
    let topic = topic.trim();
    let end = main_content_end(duration_minutes);
    format!(
        "# {topic}

## Introduction (0:00 - 0:30)
Hello everyone! Welcome back to my channel. Today we're going to dive deep into {topic} that I know you've been waiting for.

## Main Content (0:30 - {end}:00)
Let me walk you through the key points that will help you understand this better:

1. **First Point**: This is where we establish the foundation of our discussion.
2. **Second Point**: Building on what we just learned, let's explore this further.
3. **Third Point**: Now for the most important part that ties everything together.

## Conclusion ({end}:00 - {duration_minutes}:00)
That's a wrap! I hope you found this information valuable. Don't forget to like this video if it helped you, subscribe for more content like this, and let me know in the comments what you'd like to see next!

Thanks for watching, and I'll see you in the next one!
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_content_end_floors() {
        assert_eq!(main_content_end(10), 8);
        assert_eq!(main_content_end(5), 4);
        assert_eq!(main_content_end(1), 0);
        assert_eq!(main_content_end(7), 5);
        assert_eq!(main_content_end(60), 48);
    }

    #[test]
    fn test_cooking_ten_minutes() {
        let text = render("Cooking", 10);
        assert!(text.starts_with("# Cooking\n"));
        assert!(text.contains("## Main Content (0:30 - 8:00)"));
        assert!(text.contains("## Conclusion (8:00 - 10:00)"));
        assert!(text.contains("dive deep into Cooking that"));
    }
}
