//! jq builtins that are defined in jq itself.
//!
//! Keys are builtin names; a source may define several arities of the same
//! name plus private helpers. Functions implemented natively by the
//! interpreter (`length`, `keys`, `path`, `getpath`, ...) are not listed.

/// The table the `jqgen` binary and `jq_builtins` build script generate from.
pub const BUILTIN_FUNC_DEFINITIONS: &[(&str, &str)] = &[
    ("not", "def not: if . then false else true end;"),
    ("in", "def in(xs): . as $x | xs | has($x);"),
    ("inside", "def inside(xs): . as $x | xs | contains($x);"),
    ("map", "def map(f): [.[] | f];"),
    ("select", "def select(f): if f then . else empty end;"),
    (
        "recurse",
        "def recurse: recurse(.[]?);
         def recurse(f): def r: ., (f | r); r;
         def recurse(f; cond): def r: ., (f | select(cond) | r); r;",
    ),
    ("values", "def values: select(. != null);"),
    ("nulls", "def nulls: select(. == null);"),
    ("booleans", r#"def booleans: select(type == "boolean");"#),
    ("numbers", r#"def numbers: select(type == "number");"#),
    ("strings", r#"def strings: select(type == "string");"#),
    ("arrays", r#"def arrays: select(type == "array");"#),
    ("objects", r#"def objects: select(type == "object");"#),
    (
        "iterables",
        r#"def iterables: select(type | . == "array" or . == "object");"#,
    ),
    (
        "scalars",
        r#"def scalars: select(type | . != "array" and . != "object");"#,
    ),
    (
        "add",
        "def add: reduce .[] as $x (null; . + $x);
         def add(f): reduce f as $x (null; . + $x);",
    ),
    (
        "any",
        "def any: reduce .[] as $x (false; . or $x);
         def any(y): reduce .[] as $x (false; . or ($x | y));
         def any(g; y): isempty(first(g | select(y))) | not;",
    ),
    (
        "all",
        "def all: reduce .[] as $x (true; . and $x);
         def all(y): reduce .[] as $x (true; . and ($x | y));
         def all(g; y): isempty(first(g | y and empty));",
    ),
    (
        "range",
        "def range($end): range(0; $end);
         def range($start; $end): range($start; $end; 1);",
    ),
    (
        "to_entries",
        "def to_entries: [keys[] as $k | {key: $k, value: .[$k]}];",
    ),
    (
        "from_entries",
        r#"def from_entries:
             reduce .[] as $x ({};
               . + {($x | if has("key") then .key elif has("k") then .k else .name end
                        | if type == "string" then . else tojson end):
                    ($x | if has("value") then .value else .v end)});"#,
    ),
    (
        "with_entries",
        "def with_entries(f): to_entries | map(f) | from_entries;",
    ),
    ("del", "def del(f): delpaths([path(f)]);"),
    (
        "paths",
        "def paths: path(..) | select(. != []);
         def paths(node_filter): . as $x | paths | select(. as $p | $x | getpath($p) | node_filter);",
    ),
    ("leaf_paths", "def leaf_paths: paths(scalars);"),
    ("todate", r#"def todate: strftime("%Y-%m-%dT%H:%M:%SZ");"#),
    (
        "fromdate",
        r#"def fromdate: strptime("%Y-%m-%dT%H:%M:%SZ") | mktime;"#,
    ),
    ("finites", "def finites: select(isinfinite or isnan | not);"),
    ("normals", "def normals: select(isnormal);"),
    (
        "join",
        r#"def join($x):
             reduce .[] as $i (null;
               (if . == null then "" else . + $x end)
               + ($i | if . == null then "" elif type == "string" then . else tojson end)
             ) // "";"#,
    ),
    (
        "flatten",
        r#"def _flatten($x):
             reduce .[] as $i ([];
               if $i | type == "array" and $x != 0 then . + ($i | _flatten($x - 1)) else . + [$i] end);
           def flatten($x):
             if $x < 0 then error("flatten depth must not be negative") else _flatten($x) end;
           def flatten: _flatten(-1);"#,
    ),
    ("sort_by", "def sort_by(f): _sort_by(map([f]));"),
    ("group_by", "def group_by(f): _group_by(map([f]));"),
    ("unique_by", "def unique_by(f): [group_by(f)[] | .[0]];"),
    ("min_by", "def min_by(f): _min_by(map([f]));"),
    ("max_by", "def max_by(f): _max_by(map([f]));"),
    (
        "ascii_downcase",
        "def ascii_downcase: explode | map(if 65 <= . and . <= 90 then . + 32 end) | implode;",
    ),
    (
        "ascii_upcase",
        "def ascii_upcase: explode | map(if 97 <= . and . <= 122 then . - 32 end) | implode;",
    ),
    (
        "walk",
        r#"def walk(f):
             def w: if type == "object" then map_values(w) elif type == "array" then map(w) else . end | f;
             w;"#,
    ),
    ("map_values", "def map_values(f): .[] |= f;"),
    (
        "first",
        "def first: .[0];
         def first(f): label $out | f | ., break $out;",
    ),
    (
        "last",
        "def last: .[-1];
         def last(f): reduce f as $x (null; $x);",
    ),
    (
        "nth",
        r#"def nth($n): .[$n];
           def nth($n; f): if $n < 0 then error("Out of bounds negative array index") else last(limit($n + 1; f)) end;"#,
    ),
    ("isempty", "def isempty(g): label $go | (g | false, break $go), true;"),
    (
        "limit",
        "def limit($n; f):
           if $n > 0 then label $out | foreach f as $item (0; . + 1; $item, if . >= $n then break $out else empty end)
           elif $n == 0 then empty
           else f end;",
    ),
    (
        "while",
        "def while(cond; update): def _while: if cond then ., (update | _while) else empty end; _while;",
    ),
    (
        "until",
        "def until(cond; update): def _until: if cond then . else update | _until end; _until;",
    ),
    (
        "repeat",
        "def repeat(f): def _repeat: ., (f | _repeat); _repeat;",
    ),
    ("env", "def env: $ENV;"),
    (
        "inputs",
        r#"def inputs: try repeat(input) catch if . == "No more inputs" then empty else error end;"#,
    ),
    (
        "combinations",
        "def combinations:
           if length == 0 then [] else .[0][] as $x | (.[1:] | combinations) as $w | [$x] + $w end;
         def combinations(n): . as $dot | [range(n)] | map($dot) | combinations;",
    ),
    (
        "INDEX",
        "def INDEX(stream; idx_expr): reduce stream as $row ({}; .[$row | idx_expr | tostring] |= $row);
         def INDEX(idx_expr): INDEX(.[]; idx_expr);",
    ),
    (
        "truncate_stream",
        "def truncate_stream(f): . as $n | null | f | if .[0] | length > $n then .[0] |= .[$n:] else empty end;",
    ),
    (
        "abs",
        r#"def abs: if type == "number" and . < 0 then -. else . end;"#,
    ),
    ("index", "def index($i): indices($i) | .[0];"),
    ("rindex", "def rindex($i): indices($i) | .[-1:][0];"),
    (
        "splits",
        "def splits($re): splits($re; null);
         def splits($re; $flags): split($re; $flags) | .[];",
    ),
    ("debug", "def debug(msg): (msg | debug | empty), .;"),
    (
        "pick",
        "def pick(p): . as $v | reduce path(p) as $p (null; setpath($p; $v | getpath($p)));",
    ),
    ("halt_error", "def halt_error: halt_error(5);"),
    ("todateiso8601", r#"def todateiso8601: strftime("%Y-%m-%dT%H:%M:%SZ");"#),
    (
        "tostream",
        "def tostream: path(def r: (.[]? | r), .; r) as $p | getpath($p) | reduce path(.[]?) as $q ([$p, .]; [$p + $q]);",
    ),
    ("to_array", r#"def to_array: if type == "array" then . else [.] end;"#),
];
