pub static CONFIG_HELP: &str = "JSON file with export settings

Every field is optional, flags given on the command line win.

{
    \"input_dir\": \"images-bmp\",
    \"output_file\": \"output.txt\",
    \"width\": 64,
    \"height\": 32,
    \"bits\": 16,
    \"order\": \"sorted\"
}";

pub static BITS_HELP: &str = "Bits per array element

Must be 8, 16 or 32. 16 matches RGB565 panels.
The last width*height*(bits/8) bytes of every file are exported,
anything before them is dropped as header.";

pub static ORDER_HELP: &str = "Order of the images in the output

native keeps the order of the directory listing, which
depends on the platform. sorted orders images by file name.";

pub static SELECT_HELP: &str = "Export country and time zone pickers as HTML

Writes a labelled <select> for the country codes followed by
a labelled <select> for the time zones.";
