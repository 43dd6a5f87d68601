//! MCP tool definitions.

use super::protocol::Tool;
use crate::youtube::COMMENT_PAGE_SIZE;
use serde_json::json;

pub const GET_VIDEO_ID: &str = "get_video_id_from_url";
pub const GET_VIDEO_COMMENTS: &str = "get_video_comments";
pub const ANALYZE_SENTIMENT: &str = "analyze_comments_sentiment";

/// Get all available tools.
pub fn get_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: GET_VIDEO_ID.to_string(),
            description: "Extracts the video ID from a YouTube video URL. \
                Returns the video ID, or 'Error: Invalid YouTube URL'."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "The YouTube video URL"
                    }
                },
                "required": ["url"]
            }),
        },
        Tool {
            name: GET_VIDEO_COMMENTS.to_string(),
            description: format!(
                "Retrieves the first {} top-level comments of a YouTube video \
                 as a JSON array of comment texts.",
                COMMENT_PAGE_SIZE
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "video_id": {
                        "type": "string",
                        "description": "The ID of the YouTube video"
                    }
                },
                "required": ["video_id"]
            }),
        },
        Tool {
            name: ANALYZE_SENTIMENT.to_string(),
            description: "Analyzes the sentiment of comments for a given YouTube video URL. \
                Returns positive, negative, neutral and total comment counts."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "video_url": {
                        "type": "string",
                        "description": "The URL of the YouTube video"
                    }
                },
                "required": ["video_url"]
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_catalog() {
        let tools = get_tools();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec![GET_VIDEO_ID, GET_VIDEO_COMMENTS, ANALYZE_SENTIMENT]);

        for tool in &tools {
            let required = tool.input_schema["required"].as_array().unwrap();
            assert_eq!(required.len(), 1);
            let arg = required[0].as_str().unwrap();
            assert_eq!(tool.input_schema["properties"][arg]["type"], "string");
        }
    }

    #[test]
    fn test_comments_description_matches_page_size() {
        let tools = get_tools();
        let comments = tools.iter().find(|t| t.name == GET_VIDEO_COMMENTS).unwrap();
        assert!(comments
            .description
            .contains(&format!("first {} top-level", COMMENT_PAGE_SIZE)));
    }
}
